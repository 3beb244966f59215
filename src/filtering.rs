// third-party imports
use wildcard::{Case, Options, WildcardList};

// local imports
use crate::error::{Error, Result};
use crate::settings::FilterSettings;

// ---

/// Accepts names matching any include pattern and none of the exclude patterns.
///
/// An empty include list accepts every name not excluded.
#[derive(Debug, Default)]
pub struct NameFilter {
    include: WildcardList,
    exclude: WildcardList,
}

impl NameFilter {
    pub fn new(include: WildcardList, exclude: WildcardList) -> Self {
        Self { include, exclude }
    }

    pub fn from_settings(settings: &FilterSettings) -> Result<Self> {
        let options = Options::new()
            .case(Case::ignoring(settings.ignore_case))
            .separator(separator(&settings.separator)?);

        let include = compile_all(&options, &settings.include)?;
        let exclude = compile_all(&options, &settings.exclude)?;

        log::debug!(
            "compiled {} include and {} exclude patterns, case {:?}",
            include.len(),
            exclude.len(),
            options.case
        );

        Ok(Self::new(include, exclude))
    }

    #[inline]
    pub fn accepts(&self, name: &str) -> bool {
        (self.include.is_empty() || self.include.match_any(name)) && !self.exclude.match_any(name)
    }

    pub fn include(&self) -> &WildcardList {
        &self.include
    }

    pub fn exclude(&self) -> &WildcardList {
        &self.exclude
    }
}

// ---

fn compile_all(options: &Options, exprs: &[String]) -> Result<WildcardList> {
    let mut list = WildcardList::new();
    for expr in exprs {
        list.extend(options.compile_list(expr)?);
    }
    Ok(list)
}

pub(crate) fn separator(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidSeparator(value.to_owned())),
    }
}
