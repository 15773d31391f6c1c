use crate::domain::ports::CountryLookup;

/// Subset of ISO 3166-1 (English short name to alpha-3) covering nations
/// that have reached a World Cup final plus frequent hosts and contenders.
/// Linear scan over a small fixed set; no index needed.
const ISO_ALPHA3: &[(&str, &str)] = &[
    ("Argentina", "ARG"),
    ("Belgium", "BEL"),
    ("Brazil", "BRA"),
    ("Croatia", "HRV"),
    ("France", "FRA"),
    ("Germany", "DEU"),
    ("Hungary", "HUN"),
    ("Italy", "ITA"),
    ("Japan", "JPN"),
    ("Mexico", "MEX"),
    ("Morocco", "MAR"),
    ("Netherlands", "NLD"),
    ("Portugal", "PRT"),
    ("Qatar", "QAT"),
    ("Russia", "RUS"),
    ("South Africa", "ZAF"),
    ("Spain", "ESP"),
    ("Sweden", "SWE"),
    ("United States", "USA"),
    ("Uruguay", "URY"),
];

/// Standard name-to-code table. Knows nothing about dissolved states;
/// those go through [`OverrideResolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoTable;

impl CountryLookup for IsoTable {
    fn lookup(&self, name: &str) -> Option<&'static str> {
        ISO_ALPHA3
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, code)| *code)
    }
}

/// Historical names the standard table cannot answer.
const OVERRIDES: &[(&str, &str)] = &[("Czechoslovakia", "CZE")];

/// Override-first resolver: explicit exceptions win over the wrapped
/// lookup, even for names the wrapped lookup would also answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideResolver<L> {
    inner: L,
}

impl<L: CountryLookup> OverrideResolver<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: CountryLookup> CountryLookup for OverrideResolver<L> {
    fn lookup(&self, name: &str) -> Option<&'static str> {
        OVERRIDES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, code)| *code)
            .or_else(|| self.inner.lookup(name))
    }
}

/// The resolver the dashboard runs with: overrides layered on the ISO table.
pub fn default_resolver() -> OverrideResolver<IsoTable> {
    OverrideResolver::new(IsoTable)
}
