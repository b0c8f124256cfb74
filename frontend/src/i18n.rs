//! Language state and UI dictionaries.
//!
//! The language choice drives three things at once: which half of each
//! bilingual pair is shown, the UI chrome strings, and the document's
//! `lang`/`dir` attributes (Arabic is right-to-left). The choice persists
//! in localStorage across visits; Arabic is the default.

use leptos::*;

use crate::config::LANG_STORAGE_KEY;

// =============================================================================
// Language
// =============================================================================

/// Display language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lang {
    /// Arabic (right-to-left), the site default.
    #[default]
    Ar,
    /// English (left-to-right).
    En,
}

impl Lang {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

// =============================================================================
// Dictionaries
// =============================================================================

/// UI chrome strings for one language.
pub struct Dictionary {
    pub site_description: &'static str,
    pub search_placeholder: &'static str,
    pub all_governorates: &'static str,
    pub all_types: &'static str,
    pub no_results: &'static str,
    pub loading: &'static str,
    pub load_error: &'static str,
    pub back: &'static str,
    pub photos: &'static str,
    pub address: &'static str,
    pub working_hours: &'static str,
    pub price: &'static str,
    pub age: &'static str,
    pub place_nature: &'static str,
    pub phone: &'static str,
    pub family_friendly: &'static str,
    pub kids_friendly: &'static str,
    pub parking: &'static str,
    pub reservation_needed: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub view_on_map: &'static str,
    pub website: &'static str,
    pub social_media: &'static str,
    pub notes: &'static str,
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
}

pub const AR: Dictionary = Dictionary {
    site_description: "دليل أماكن الخروجات العائلية",
    search_placeholder: "ابحث عن مكان...",
    all_governorates: "كل المحافظات",
    all_types: "كل الأنواع",
    no_results: "لا توجد أماكن مطابقة",
    loading: "جاري التحميل...",
    load_error: "تعذر تحميل الأماكن",
    back: "رجوع",
    photos: "الصور",
    address: "العنوان",
    working_hours: "مواعيد العمل",
    price: "السعر",
    age: "السن المناسب",
    place_nature: "طبيعة المكان",
    phone: "التليفون",
    family_friendly: "مناسب للعائلات",
    kids_friendly: "مناسب للأطفال",
    parking: "موقف سيارات",
    reservation_needed: "محتاج حجز",
    yes: "نعم",
    no: "لا",
    view_on_map: "الموقع على الخريطة",
    website: "الموقع الإلكتروني",
    social_media: "صفحات التواصل",
    notes: "ملاحظات",
    not_found_title: "المكان غير موجود",
    not_found_body: "المكان اللي بتدور عليه مش موجود أو اتشال",
    back_home: "الرجوع للرئيسية",
};

pub const EN: Dictionary = Dictionary {
    site_description: "A directory of family-friendly outings",
    search_placeholder: "Search for a place...",
    all_governorates: "All governorates",
    all_types: "All types",
    no_results: "No matching places",
    loading: "Loading...",
    load_error: "Could not load places",
    back: "Back",
    photos: "Photos",
    address: "Address",
    working_hours: "Working hours",
    price: "Price",
    age: "Suitable age",
    place_nature: "Place nature",
    phone: "Phone",
    family_friendly: "Family friendly",
    kids_friendly: "Kids friendly",
    parking: "Parking",
    reservation_needed: "Reservation needed",
    yes: "Yes",
    no: "No",
    view_on_map: "View on map",
    website: "Website",
    social_media: "Social media",
    notes: "Notes",
    not_found_title: "Place not found",
    not_found_body: "The place you are looking for does not exist or was removed",
    back_home: "Back to home",
};

/// Dictionary for a language.
pub fn dictionary(lang: Lang) -> &'static Dictionary {
    match lang {
        Lang::Ar => &AR,
        Lang::En => &EN,
    }
}

// =============================================================================
// Language context
// =============================================================================

/// Reactive language state, provided once at the application root.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    lang: RwSignal<Lang>,
}

impl LanguageContext {
    /// Current language (reactive).
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    /// Dictionary for the current language (reactive).
    pub fn t(&self) -> &'static Dictionary {
        dictionary(self.lang.get())
    }

    /// Text direction for the current language (reactive).
    pub fn dir(&self) -> &'static str {
        self.lang.get().dir()
    }

    /// Switch language: updates the signal, persists the choice, and syncs
    /// the document's `lang`/`dir` attributes.
    pub fn set(&self, lang: Lang) {
        self.lang.set(lang);
        store_lang(lang);
        apply_document_lang(lang);
    }

    pub fn toggle(&self) {
        self.set(self.lang.get_untracked().toggled());
    }
}

/// Install the language context at the application root.
///
/// Restores the stored choice (default Arabic) and syncs the document
/// attributes before the first render.
pub fn provide_language() -> LanguageContext {
    let initial = stored_lang().unwrap_or_default();
    apply_document_lang(initial);

    let ctx = LanguageContext {
        lang: create_rw_signal(initial),
    };
    provide_context(ctx);
    ctx
}

/// Access the language context from any component below the root.
pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}

fn stored_lang() -> Option<Lang> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let code = storage.get_item(LANG_STORAGE_KEY).ok()??;
    Lang::from_code(&code)
}

fn store_lang(lang: Lang) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANG_STORAGE_KEY, lang.code());
    }
}

fn apply_document_lang(lang: Lang) {
    if let Some(root) = gloo_utils::document().document_element() {
        let _ = root.set_attribute("lang", lang.code());
        let _ = root.set_attribute("dir", lang.dir());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_codes() {
        assert_eq!(Lang::from_code("ar"), Some(Lang::Ar));
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("xx"), None);
        assert_eq!(Lang::Ar.code(), "ar");
    }

    #[test]
    fn test_lang_dir_and_toggle() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Ar.toggled(), Lang::En);
        assert_eq!(Lang::default(), Lang::Ar);
    }

    #[test]
    fn test_dictionaries_disagree() {
        assert_ne!(AR.search_placeholder, EN.search_placeholder);
        assert_eq!(dictionary(Lang::En).yes, "Yes");
        assert_eq!(dictionary(Lang::Ar).yes, "نعم");
    }
}
