pub mod classify;
pub mod controls;
pub mod dispatch;
pub mod evaluate;
pub mod frameworks;
pub mod scan;
pub mod schema;
