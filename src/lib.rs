//! Terminal core of a portfolio site: a read-only virtual filesystem built from the
//! site's content, a small shell over it (`ls`, `cd`, `cat`, `rm`, ...), history and tab
//! completion, and the timed "rm -rf /" prank played on the page.
//!
//! The page itself (routing, theming, layout) stays outside; the shell reaches it through
//! [`host::Host`] and [`prank::PageSurface`].

pub mod cmd_parser;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod host;
pub mod navigator;
pub mod output;
pub mod page;
pub mod path_util;
pub mod prank;
pub mod runtime;
pub mod scheduler;
pub mod shell;
pub mod testing;
pub mod theme;
pub mod vfs;

pub use error::{ShellError, ShellResult};
pub use host::{Host, Section};
pub use shell::{Key, KeyEvent, Shell, ShellSettings};
pub use theme::ThemeMode;
