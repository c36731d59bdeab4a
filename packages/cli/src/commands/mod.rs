pub mod blocks;
pub mod edit;
pub mod init;
pub mod new;
pub mod show;

pub use blocks::{blocks, BlocksArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use new::{new_page, NewArgs};
pub use show::{show, ShowArgs};

use crate::config::Config;
use blockpage_model::{Component, IdGenerator, SequentialIds, UuidGenerator};
use blockpage_store::JsonFileStore;

/// Page store rooted at the configured pages directory
pub(crate) fn open_store(config: &Config, cwd: &str) -> JsonFileStore {
    JsonFileStore::new(config.get_pages_dir(cwd))
}

/// Id source for new blocks: `<prefix>-N` past any ids already on the page, or UUIDs
pub(crate) fn id_generator(config: &Config, existing: &[Component]) -> Box<dyn IdGenerator> {
    match &config.id_prefix {
        Some(prefix) => Box::new(SequentialIds::new(prefix.clone()).after(existing.iter().map(Component::id))),
        None => Box::new(UuidGenerator),
    }
}
