use crate::codec::Record;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CollectionStore, StorageBackend};

/// Save `records`, downgrading a storage failure to a warning on `result`.
///
/// The store has already logged the failure; the warning is for the user.
pub fn persist<R: Record, B: StorageBackend>(
    store: &CollectionStore<R, B>,
    records: &[R],
    result: &mut CmdResult,
) -> Result<()> {
    match store.save_all(records) {
        Ok(()) => Ok(()),
        Err(e) if e.is_storage() => {
            result.add_message(CmdMessage::warning(format!(
                "Warning: changes could not be saved to {} and may be lost.",
                store.resource()
            )));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
