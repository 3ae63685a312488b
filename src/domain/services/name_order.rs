//! Picker name ordering

/// Name that must directly precede [`THUMBS_DOWN`]
pub const THUMBS_UP: &str = "thumbs_up";
/// Name that must directly follow [`THUMBS_UP`]
pub const THUMBS_DOWN: &str = "thumbs_down";

/// Sort names for the emoji picker.
///
/// Names are sorted lexicographically, then the thumbs pair is forced into
/// up-then-down order.
pub fn picker_order<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut ordered: Vec<String> = names.into_iter().map(Into::into).collect();
    ordered.sort();
    ordered.dedup();
    pin_thumbs(&mut ordered);
    ordered
}

/// Move `thumbs_down` to directly after `thumbs_up`, keeping everything else
/// in place. No-op unless both names are present.
pub fn pin_thumbs(names: &mut Vec<String>) {
    let Some(down) = names.iter().position(|n| n == THUMBS_DOWN) else {
        return;
    };
    if !names.iter().any(|n| n == THUMBS_UP) {
        return;
    }

    let removed = names.remove(down);
    if let Some(up) = names.iter().position(|n| n == THUMBS_UP) {
        names.insert(up + 1, removed);
    }
}
