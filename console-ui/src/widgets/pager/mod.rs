mod component;

pub use component::Pager;
