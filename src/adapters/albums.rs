//! Media album titles.

use crate::guard::SaveGuard;
use crate::i18n::TranslationService;
use crate::keys;
use crate::record::{Record, RecordId, RecordStore};
use crate::substitute::FieldTranslator;

const FIELDS: &[&str] = &["title"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: Option<RecordId>,
    pub title: String,
}

impl Record for Album {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        (name == "title").then_some(self.title.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        if name == "title" {
            self.title = value;
        }
    }
}

/// Save-path guard for album rows, one per request.
pub fn save_guard<'a, S, St>(
    service: &'a S,
    store: &'a St,
    context: &'a str,
) -> SaveGuard<'a, S, St>
where
    S: TranslationService,
    St: RecordStore,
{
    SaveGuard::new(service, store, context, keys::media_album, FIELDS)
}

/// Translate one album title. Without an id the value passes through.
pub fn translate_title<S: TranslationService>(
    service: &S,
    context: &str,
    title: &str,
    id: Option<RecordId>,
) -> String {
    FieldTranslator::new("title", keys::media_album).translate(service, context, title, id)
}

/// Substitute every album title in a directory page.
pub fn translate_albums<S: TranslationService>(service: &S, context: &str, albums: &mut [Album]) {
    for album in albums.iter_mut() {
        album.title = translate_title(service, context, &album.title, album.id);
    }
}
