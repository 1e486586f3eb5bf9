pub mod fallback;

mod content;
pub use content::*;

mod drawer;
pub use drawer::*;

mod footer;
pub use footer::*;

mod header;
pub use header::*;

mod scroll_to_top;
pub use scroll_to_top::*;

mod shell;
pub use shell::*;

mod toast_host;
pub use toast_host::*;
