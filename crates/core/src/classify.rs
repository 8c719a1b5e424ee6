//! Scope classification: maps a variable's usage scopes to the coarse
//! category (`type`) and refined presenter (`tokenType`) of its exported
//! record.

use vartok_protocol::{CoarseType, TokenPresenter, TokenType, VariableScope};

/// Coarse category table, consulted for the first scope only after the
/// priority rules in `coarse_type` have passed.
fn scope_category(scope: VariableScope) -> Option<CoarseType> {
    match scope {
        VariableScope::FontFamily => Some(CoarseType::FontFamily),
        VariableScope::FontStyle => Some(CoarseType::FontStyle),
        VariableScope::FontWeight => Some(CoarseType::FontWeight),
        VariableScope::FontSize
        | VariableScope::LineHeight
        | VariableScope::LetterSpacing
        | VariableScope::ParagraphSpacing
        | VariableScope::Gap
        | VariableScope::CornerRadius => Some(CoarseType::FontSize),
        _ => None,
    }
}

/// Presenter table keyed by a variable's first scope.
fn scope_presenter(scope: VariableScope) -> Option<TokenPresenter> {
    match scope {
        VariableScope::CornerRadius => Some(TokenPresenter::BorderRadius),
        VariableScope::WidthHeight | VariableScope::Gap => Some(TokenPresenter::Spacing),
        VariableScope::AllFills
        | VariableScope::FrameFill
        | VariableScope::ShapeFill
        | VariableScope::TextFill
        | VariableScope::StrokeColor
        | VariableScope::EffectColor => Some(TokenPresenter::Color),
        VariableScope::StrokeFloat => Some(TokenPresenter::Border),
        VariableScope::Opacity => Some(TokenPresenter::Opacity),
        VariableScope::FontFamily => Some(TokenPresenter::FontFamily),
        VariableScope::FontStyle | VariableScope::FontWeight => Some(TokenPresenter::FontWeight),
        VariableScope::FontSize => Some(TokenPresenter::FontSize),
        VariableScope::LineHeight => Some(TokenPresenter::LineHeight),
        VariableScope::LetterSpacing => Some(TokenPresenter::LetterSpacing),
        _ => None,
    }
}

/// Coarse category for a scope list.
///
/// The font rules match anywhere in the list and win in a fixed order:
/// family, then style/weight, then size. Only when none applies does the
/// first scope decide via the category table.
pub fn coarse_type(scopes: &[VariableScope]) -> Option<CoarseType> {
    if scopes.contains(&VariableScope::FontFamily) {
        return Some(CoarseType::FontFamily);
    }
    if scopes.contains(&VariableScope::FontStyle) || scopes.contains(&VariableScope::FontWeight) {
        return Some(CoarseType::FontWeight);
    }
    if scopes.contains(&VariableScope::FontSize) {
        return Some(CoarseType::FontSize);
    }
    scopes.first().copied().and_then(scope_category)
}

/// The record's `tokenType`: color whenever the coarse category is color,
/// otherwise the first scope's presenter, falling back to the raw scope when
/// the table has no mapping.
pub fn token_type(scopes: &[VariableScope], coarse: Option<CoarseType>) -> Option<TokenType> {
    if coarse == Some(CoarseType::Color) {
        return Some(TokenPresenter::Color.into());
    }
    let first = scopes.first().copied();
    match first.and_then(scope_presenter) {
        Some(presenter) => Some(presenter.into()),
        None => first.map(TokenType::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_family_wins_anywhere_in_the_list() {
        let scopes = [VariableScope::Gap, VariableScope::FontFamily];
        assert_eq!(coarse_type(&scopes), Some(CoarseType::FontFamily));
    }

    #[test]
    fn font_style_classifies_as_weight() {
        assert_eq!(
            coarse_type(&[VariableScope::FontStyle]),
            Some(CoarseType::FontWeight)
        );
        assert_eq!(
            coarse_type(&[VariableScope::TextContent, VariableScope::FontWeight]),
            Some(CoarseType::FontWeight)
        );
    }

    #[test]
    fn font_size_beats_first_scope_fallback() {
        let scopes = [VariableScope::TextContent, VariableScope::FontSize];
        assert_eq!(coarse_type(&scopes), Some(CoarseType::FontSize));
    }

    #[test]
    fn first_scope_decides_the_rest() {
        assert_eq!(coarse_type(&[VariableScope::Gap]), Some(CoarseType::FontSize));
        assert_eq!(
            coarse_type(&[VariableScope::CornerRadius, VariableScope::Opacity]),
            Some(CoarseType::FontSize)
        );
        assert_eq!(coarse_type(&[VariableScope::Opacity]), None);
        assert_eq!(coarse_type(&[]), None);
    }

    #[test]
    fn presenter_from_first_scope() {
        assert_eq!(
            token_type(&[VariableScope::CornerRadius], Some(CoarseType::FontSize)),
            Some(TokenPresenter::BorderRadius.into())
        );
        assert_eq!(
            token_type(&[VariableScope::WidthHeight], None),
            Some(TokenPresenter::Spacing.into())
        );
        assert_eq!(
            token_type(&[VariableScope::FontStyle], Some(CoarseType::FontWeight)),
            Some(TokenPresenter::FontWeight.into())
        );
    }

    #[test]
    fn color_coarse_type_overrides_presenter() {
        assert_eq!(
            token_type(&[VariableScope::Gap], Some(CoarseType::Color)),
            Some(TokenPresenter::Color.into())
        );
        // Even with no scopes at all.
        assert_eq!(
            token_type(&[], Some(CoarseType::Color)),
            Some(TokenPresenter::Color.into())
        );
    }

    #[test]
    fn unmapped_scope_falls_back_to_itself() {
        assert_eq!(
            token_type(&[VariableScope::TextContent], None),
            Some(VariableScope::TextContent.into())
        );
        assert_eq!(
            token_type(&[VariableScope::EffectFloat], None),
            Some(VariableScope::EffectFloat.into())
        );
        assert_eq!(token_type(&[], None), None);
    }
}
