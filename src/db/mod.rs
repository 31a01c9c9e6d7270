pub mod daily;
pub mod db;
