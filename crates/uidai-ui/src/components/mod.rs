pub(crate) mod blocks;
pub(crate) mod page;
pub(crate) mod shell;
