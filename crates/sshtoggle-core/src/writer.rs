//! Regenerates configuration text from a [`SelectionStore`].

use crate::SelectionStore;

/// Serialize every record in order, enabled ones plain and the rest
/// commented out.
///
/// The output is a full replacement for the file. Content that was not read
/// into a record does not survive.
pub fn serialize(store: &SelectionStore) -> String {
    let mut out = String::new();
    for (_, record, selected) in store.entries() {
        record.write_block(&mut out, selected);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    #[test]
    fn selected_and_unselected_blocks() {
        let mut store =
            SelectionStore::new(vec![Record::vault("Personal"), Record::item("GitHub", "Work")], [0]);

        assert_eq!(
            serialize(&store),
            "[[ssh-keys]]\nvault = \"Personal\"\n\n#[[ssh-keys]]\n#item = \"GitHub\"\n#vault = \"Work\"\n\n"
        );

        store.toggle(1).expect("position 1 exists");
        assert_eq!(
            serialize(&store),
            "[[ssh-keys]]\nvault = \"Personal\"\n\n[[ssh-keys]]\nitem = \"GitHub\"\nvault = \"Work\"\n\n"
        );
    }

    #[test]
    fn empty_store_writes_nothing() {
        assert_eq!(serialize(&SelectionStore::default()), "");
    }
}
