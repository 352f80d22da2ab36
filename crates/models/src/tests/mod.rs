/// Entity CRUD tests against a live Postgres
pub mod crud_tests;
