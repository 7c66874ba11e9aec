//! Loading of user-declared directives from a TOML file.

use std::borrow::Cow;
use std::path::Path;

use ngxparse_core::{DescriptorTable, ExtensionFile};

/// The builtin table, extended with the directives declared in `path` if one
/// is given.
pub(crate) fn load_table(path: Option<&Path>) -> Result<Cow<'static, DescriptorTable>, String> {
    let builtin = DescriptorTable::builtin();
    let Some(path) = path else {
        return Ok(Cow::Borrowed(builtin));
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("error reading file '{}': {}", path.display(), e))?;
    let file: ExtensionFile = toml::from_str(&text)
        .map_err(|e| format!("error parsing directives in '{}': {}", path.display(), e))?;
    let table = builtin
        .with_extensions(&file)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    tracing::info!(
        file = %path.display(),
        added = file.directive.len(),
        "loaded directive extensions"
    );
    Ok(Cow::Owned(table))
}
