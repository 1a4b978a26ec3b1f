//! Path template expansion
//!
//! Pure mapping from (template, input) to an output path relative to the
//! module's output directory.

use crate::domain::entities::InputFile;
use crate::domain::value_objects::{path, OutputTemplate};
use crate::error::{GenError, GenResult};

/// Expand `template` for one input, in canonical form.
///
/// The result always names a file inside the output directory; `.` and
/// empty components are folded so equal files compare equal.
pub fn expand_output_path(template: &OutputTemplate, input: &InputFile) -> GenResult<String> {
    let raw = template.expand(input);
    path::normalize_within(&raw).map_err(|reason| GenError::InvalidOutputPath {
        input: input.path(),
        output: raw,
        reason,
    })
}

/// Parse `template` and expand it for every input, in order.
pub fn expand_all(template: &str, inputs: &[InputFile]) -> GenResult<Vec<String>> {
    let template = OutputTemplate::parse(template)?;
    inputs
        .iter()
        .map(|input| expand_output_path(&template, input))
        .collect()
}
