pub mod config;
pub mod messages;
pub mod scope;
pub mod tokens;

pub use config::{ColorFormat, ExportConfig, UnitFormat};
pub use messages::{ExportMessage, UiRequest};
pub use scope::{CoarseType, TokenPresenter, TokenType, VariableScope};
pub use tokens::{
    MergedEntry, MergedTokens, ThemeTokens, TokenColor, TokenMap, TokenRecord, TokenValue,
};
