mod formatter;

pub use formatter::GraphFormatter;
