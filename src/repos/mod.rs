/*
 * Responsibility
 * - SQLx によるテーブル操作 (PgPool を受け取る関数群)
 */
pub mod db;
pub mod error;
pub mod lecture_repo;
