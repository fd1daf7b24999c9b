pub mod draw;
pub mod inspect;
