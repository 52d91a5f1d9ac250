//! Document folder titles.
//!
//! Folders behave like media albums on the save path; on the read path the
//! folder title additionally appears inside breadcrumb trails, which are
//! substituted element by element.

use crate::guard::SaveGuard;
use crate::i18n::TranslationService;
use crate::keys;
use crate::record::{Record, RecordId, RecordStore};
use crate::substitute::FieldTranslator;

const FIELDS: &[&str] = &["title"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: Option<RecordId>,
    pub title: String,
}

impl Record for Folder {
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

/// One element of a folder breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub folder_id: RecordId,
    pub title: String,
}

/// Save-path guard for folder rows, one per request.
pub fn save_guard<'a, S, St>(
    service: &'a S,
    store: &'a St,
    context: &'a str,
) -> SaveGuard<'a, S, St>
where
    S: TranslationService,
    St: RecordStore,
{
    SaveGuard::new(service, store, context, keys::document_folder, FIELDS)
}

/// Translate one folder title. Without an id the value passes through.
pub fn translate_title<S: TranslationService>(
    service: &S,
    context: &str,
    title: &str,
    id: Option<RecordId>,
) -> String {
    FieldTranslator::new("title", keys::document_folder).translate(service, context, title, id)
}

/// Substitute every folder title in a directory page.
pub fn translate_folders<S: TranslationService>(service: &S, context: &str, folders: &mut [Folder]) {
    for folder in folders.iter_mut() {
        folder.title = translate_title(service, context, &folder.title, folder.id);
    }
}

/// Substitute each element of a breadcrumb trail.
pub fn translate_breadcrumbs<S: TranslationService>(
    service: &S,
    context: &str,
    trail: &mut [BreadcrumbItem],
) {
    for item in trail.iter_mut() {
        item.title = translate_title(service, context, &item.title, Some(item.folder_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{InMemoryTranslationService, Language, TranslationStatus};

    fn lang(code: &str) -> Language {
        Language::from_code(code).unwrap()
    }

    fn service_with_folder() -> InMemoryTranslationService {
        let service = InMemoryTranslationService::new(lang("en"));
        service.register_string("ctx", "Document folder #7 title", "Reports", false, None);
        let id = service.string_id("ctx", "Document folder #7 title").unwrap();
        service.add_string_translation(id, &lang("fr"), "Rapports", TranslationStatus::Complete);
        service.set_current_language(lang("fr"));
        service
    }

    // ==================== Folder Title Tests ====================

    #[test]
    fn test_translate_title_substitutes() {
        let service = service_with_folder();
        assert_eq!(translate_title(&service, "ctx", "Reports", Some(7)), "Rapports");
    }

    #[test]
    fn test_translate_folders_updates_each_row() {
        let service = service_with_folder();
        let mut folders = vec![
            Folder { id: Some(7), title: "Reports".to_string() },
            Folder { id: None, title: "Drafts".to_string() },
        ];
        translate_folders(&service, "ctx", &mut folders);

        assert_eq!(folders[0].title, "Rapports");
        assert_eq!(folders[1].title, "Drafts");
    }

    // ==================== Breadcrumb Tests ====================

    #[test]
    fn test_translate_breadcrumbs_substitutes_matching_elements() {
        let service = service_with_folder();
        let mut trail = vec![
            BreadcrumbItem { folder_id: 1, title: "Home".to_string() },
            BreadcrumbItem { folder_id: 7, title: "Reports".to_string() },
        ];
        translate_breadcrumbs(&service, "ctx", &mut trail);

        assert_eq!(trail[0].title, "Home");
        assert_eq!(trail[1].title, "Rapports");
    }
}
