mod component;

pub use component::EmptyState;
