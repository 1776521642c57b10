pub mod api_payload;
