//! # Error Crate Tests
//!
//! Tests for error rendering, conversions and the shared response shapes.

#[cfg(test)]
mod error_response_tests {
    use axum::{body::to_bytes, response::IntoResponse};
    use error::{AppError, ErrorBody};

    async fn render(err: AppError) -> (u16, ErrorBody) {
        let response = err.into_response();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_taxonomy_status_codes() {
        assert_eq!(render(AppError::not_found("Task not found")).await.0, 404);
        assert_eq!(render(AppError::duplicate_email("dup")).await.0, 400);
        assert_eq!(render(AppError::duplicate_status_name("dup")).await.0, 400);
        assert_eq!(render(AppError::already_member("dup")).await.0, 400);
        assert_eq!(render(AppError::mismatch("other task")).await.0, 400);
        assert_eq!(render(AppError::validation("bad")).await.0, 400);
        assert_eq!(render(AppError::database("down")).await.0, 500);
    }

    #[tokio::test]
    async fn test_has_dependents_body() {
        let (status, body) = render(AppError::has_dependents(
            "Cannot delete status that is being used by 2 tasks",
        ))
        .await;
        assert_eq!(status, 400);
        assert_eq!(body.code, "HAS_DEPENDENTS");
        assert_eq!(body.error, "Cannot delete status that is being used by 2 tasks");
    }
}

#[cfg(test)]
mod pagination_tests {
    use error::{Paginated, PaginationMeta};

    #[test]
    fn test_page_beyond_range_metadata() {
        let page: Paginated<u32> = Paginated::new(Vec::new(), PaginationMeta::new(9, 10, 25));
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.current_page, 9);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_items, 25);
        assert!(page.pagination.is_past_end());
    }

    #[test]
    fn test_total_pages_matches_ceiling_for_many_sizes() {
        for per_page in 1 ..= 12u64 {
            for total in 0 ..= 40u64 {
                let meta = PaginationMeta::new(1, per_page, total);
                let expected = (total as f64 / per_page as f64).ceil() as u64;
                assert_eq!(meta.total_pages, expected, "total={} per_page={}", total, per_page);
            }
        }
    }
}

#[cfg(test)]
mod message_response_tests {
    use error::MessageResponse;

    #[test]
    fn test_message_response_shape() {
        let value = serde_json::to_value(MessageResponse::new("Task deleted successfully")).unwrap();
        assert_eq!(value, serde_json::json!({"message": "Task deleted successfully"}));
    }
}
