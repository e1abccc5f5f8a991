pub mod memory_user_repository;
pub mod mongo_user_repository;
