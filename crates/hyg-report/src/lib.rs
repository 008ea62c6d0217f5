//! Rendering and export for HYG signal rows.

pub mod export;
pub mod table;

pub use export::write_json;
pub use table::{
    LOADING_MESSAGE, NO_DATA_MESSAGE, TABLE_FOOTER, TABLE_TITLE, TableState, render_signals,
};
