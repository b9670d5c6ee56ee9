//! Resolution of input slots to the references configured for them.

use modgraph_core::catalog::InputSlot;
use modgraph_core::config::ParameterSet;
use modgraph_core::tag::InputTag;

/// Get the references configured for one input slot of a module instance.
///
/// Returns `None` when the slot is not configured at all, which is only
/// legitimate for optional slots; parameter validation reports the other
/// case before planning. An indexed slot yields every reference of its
/// list in order, a plain slot at most one.
pub fn input_tags_for_input(input: &InputSlot, parameters: &ParameterSet) -> Option<Vec<InputTag>> {
    let value = parameters.get(&input.name)?;

    let tags = if input.indexed {
        value.input_tags()
    } else {
        value.as_input_tag().into_iter().collect()
    };

    Some(tags)
}
