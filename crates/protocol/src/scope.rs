use serde::{Deserialize, Serialize};

/// Usage scopes a variable can be assigned in the design tool.
///
/// Wire names are the host's SCREAMING_SNAKE identifiers. The set is closed
/// per host API version; classification falls back to the raw scope name for
/// scopes without a refined mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableScope {
    AllScopes,
    TextContent,
    CornerRadius,
    WidthHeight,
    Gap,
    AllFills,
    FrameFill,
    ShapeFill,
    TextFill,
    StrokeColor,
    StrokeFloat,
    EffectFloat,
    EffectColor,
    Opacity,
    FontFamily,
    FontStyle,
    FontWeight,
    FontSize,
    LineHeight,
    LetterSpacing,
    ParagraphSpacing,
    ParagraphIndent,
    FontVariations,
}

impl VariableScope {
    /// The host-side identifier, as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllScopes => "ALL_SCOPES",
            Self::TextContent => "TEXT_CONTENT",
            Self::CornerRadius => "CORNER_RADIUS",
            Self::WidthHeight => "WIDTH_HEIGHT",
            Self::Gap => "GAP",
            Self::AllFills => "ALL_FILLS",
            Self::FrameFill => "FRAME_FILL",
            Self::ShapeFill => "SHAPE_FILL",
            Self::TextFill => "TEXT_FILL",
            Self::StrokeColor => "STROKE_COLOR",
            Self::StrokeFloat => "STROKE_FLOAT",
            Self::EffectFloat => "EFFECT_FLOAT",
            Self::EffectColor => "EFFECT_COLOR",
            Self::Opacity => "OPACITY",
            Self::FontFamily => "FONT_FAMILY",
            Self::FontStyle => "FONT_STYLE",
            Self::FontWeight => "FONT_WEIGHT",
            Self::FontSize => "FONT_SIZE",
            Self::LineHeight => "LINE_HEIGHT",
            Self::LetterSpacing => "LETTER_SPACING",
            Self::ParagraphSpacing => "PARAGRAPH_SPACING",
            Self::ParagraphIndent => "PARAGRAPH_INDENT",
            Self::FontVariations => "FONT_VARIATIONS",
        }
    }
}

impl std::fmt::Display for VariableScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse value category derived from a variable's scopes.
///
/// `color` is never produced by the scope tables directly; it is forced when
/// the variable's resolved type is COLOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoarseType {
    FontFamily,
    FontStyle,
    FontWeight,
    FontSize,
    Color,
}

impl CoarseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontStyle => "fontStyle",
            Self::FontWeight => "fontWeight",
            Self::FontSize => "fontSize",
            Self::Color => "color",
        }
    }
}

impl std::fmt::Display for CoarseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refined category consumed by downstream token tooling.
///
/// Shadow, animation and easing belong to the presenter vocabulary even
/// though no scope maps to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenPresenter {
    Color,
    Shadow,
    Animation,
    Border,
    BorderRadius,
    Easing,
    FontFamily,
    FontSize,
    FontWeight,
    LetterSpacing,
    LineHeight,
    Opacity,
    Spacing,
}

impl TokenPresenter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Shadow => "shadow",
            Self::Animation => "animation",
            Self::Border => "border",
            Self::BorderRadius => "borderRadius",
            Self::Easing => "easing",
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::LetterSpacing => "letterSpacing",
            Self::LineHeight => "lineHeight",
            Self::Opacity => "opacity",
            Self::Spacing => "spacing",
        }
    }
}

impl std::fmt::Display for TokenPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `tokenType` field of an exported record: a refined presenter when the
/// tables map the variable's first scope, otherwise the raw scope itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenType {
    Presenter(TokenPresenter),
    Scope(VariableScope),
}

impl From<TokenPresenter> for TokenType {
    fn from(presenter: TokenPresenter) -> Self {
        Self::Presenter(presenter)
    }
}

impl From<VariableScope> for TokenType {
    fn from(scope: VariableScope) -> Self {
        Self::Scope(scope)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Presenter(p) => p.fmt(f),
            Self::Scope(s) => s.fmt(f),
        }
    }
}
