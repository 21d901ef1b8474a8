/// UseCase identification shown in page headers and logs
pub trait UseCaseMetadata {
    /// UseCase index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "importacao_vendas"
    fn usecase_name() -> &'static str;

    /// Name displayed in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u501_importacao_vendas"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
