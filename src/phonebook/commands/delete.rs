use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::RecordLookup;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, lookup: &RecordLookup) -> Result<CmdResult> {
    let id = store
        .find(lookup)
        .map(|r| r.id)
        .ok_or_else(|| PhonebookError::NotFound(lookup.clone()))?;

    let removed = store.delete(id)?;
    log::debug!("event=record_deleted id={}", removed.id);

    Ok(CmdResult::default()
        .with_affected_records(vec![removed])
        .with_message(CmdMessage::success("Record deleted.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};

    #[test]
    fn removes_one_record_and_keeps_the_rest() {
        let mut store = RecordStore::new();
        create::run(&mut store, "Ana Reyes", "09171111111", "Pasig").unwrap();
        create::run(&mut store, "Ben Cruz", "09172222222", "Taguig").unwrap();
        create::run(&mut store, "Cy Lim", "09173333333", "Manila").unwrap();

        let result = run(&mut store, &RecordLookup::Id(2)).unwrap();
        assert_eq!(result.affected_records[0].name, "Ben Cruz");

        let remaining = list::run(&store).unwrap().listed_records;
        let ids: Vec<u32> = remaining.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(remaining[1].name, "Cy Lim");
    }

    #[test]
    fn deletes_by_number() {
        let mut store = RecordStore::new();
        create::run(&mut store, "Ana Reyes", "09171111111", "Pasig").unwrap();
        run(&mut store, &RecordLookup::number("0917-111-1111")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn missing_record_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        create::run(&mut store, "Ana Reyes", "09171111111", "Pasig").unwrap();

        let result = run(&mut store, &RecordLookup::Id(3));
        assert!(matches!(result, Err(PhonebookError::NotFound(_))));
        assert_eq!(store.len(), 1);
    }
}
