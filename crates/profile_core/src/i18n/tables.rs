use super::{
    CommonTexts, FeelingTexts, NotificationTexts, ThemeCustomizationTexts, Translations,
};

pub(super) const ES: Translations = Translations {
    feelings: FeelingTexts {
        good: "Me cae bien",
        bad: "Me cae mal",
        neutral: "Neutral",
    },
    notifications: NotificationTexts {
        theme_customization: ThemeCustomizationTexts {
            title: "Personalización de Tema",
            message: "¿Prefieres usar los temas predeterminados o crear una carpeta de temas personalizados?",
            use_default: "Usar predeterminados",
            use_custom: "Temas personalizados",
        },
        background_changed: "Fondo actualizado correctamente",
        language_changed: "Idioma cambiado correctamente",
        rain_toggled: "Efecto lluvia actualizado",
    },
    common: CommonTexts {
        error: "Error",
        success: "Éxito",
    },
};

pub(super) const EN: Translations = Translations {
    feelings: FeelingTexts {
        good: "I like them",
        bad: "I don't like them",
        neutral: "Neutral",
    },
    notifications: NotificationTexts {
        theme_customization: ThemeCustomizationTexts {
            title: "Theme Customization",
            message: "Do you prefer to use default themes or create a custom themes folder?",
            use_default: "Use defaults",
            use_custom: "Custom themes",
        },
        background_changed: "Background updated successfully",
        language_changed: "Language changed successfully",
        rain_toggled: "Rain effect updated",
    },
    common: CommonTexts {
        error: "Error",
        success: "Success",
    },
};

pub(super) const PL: Translations = Translations {
    feelings: FeelingTexts {
        good: "Lubię ich",
        bad: "Nie lubię ich",
        neutral: "Neutralnie",
    },
    notifications: NotificationTexts {
        theme_customization: ThemeCustomizationTexts {
            title: "Personalizacja Motywu",
            message: "Czy wolisz używać domyślnych motywów czy utworzyć folder własnych motywów?",
            use_default: "Użyj domyślnych",
            use_custom: "Własne motywy",
        },
        background_changed: "Tło zostało pomyślnie zaktualizowane",
        language_changed: "Język został pomyślnie zmieniony",
        rain_toggled: "Efekt deszczu zaktualizowany",
    },
    common: CommonTexts {
        error: "Błąd",
        success: "Sukces",
    },
};

pub(super) const IT: Translations = Translations {
    feelings: FeelingTexts {
        good: "Mi piacciono",
        bad: "Non mi piacciono",
        neutral: "Neutrale",
    },
    notifications: NotificationTexts {
        theme_customization: ThemeCustomizationTexts {
            title: "Personalizzazione Tema",
            message: "Preferisci usare i temi predefiniti o creare una cartella di temi personalizzati?",
            use_default: "Usa predefiniti",
            use_custom: "Temi personalizzati",
        },
        background_changed: "Sfondo aggiornato con successo",
        language_changed: "Lingua cambiata con successo",
        rain_toggled: "Effetto pioggia aggiornato",
    },
    common: CommonTexts {
        error: "Errore",
        success: "Successo",
    },
};

pub(super) const UK: Translations = Translations {
    feelings: FeelingTexts {
        good: "Вони мені подобаються",
        bad: "Вони мені не подобаються",
        neutral: "Нейтрально",
    },
    notifications: NotificationTexts {
        theme_customization: ThemeCustomizationTexts {
            title: "Персоналізація Теми",
            message: "Чи віддаєте перевагу стандартним темам або створенню папки власних тем?",
            use_default: "Використати стандартні",
            use_custom: "Власні теми",
        },
        background_changed: "Фон успішно оновлено",
        language_changed: "Мову успішно змінено",
        rain_toggled: "Ефект дощу оновлено",
    },
    common: CommonTexts {
        error: "Помилка",
        success: "Успіх",
    },
};

pub(super) const RU: Translations = Translations {
    feelings: FeelingTexts {
        good: "Они мне нравятся",
        bad: "Они мне не нравятся",
        neutral: "Нейтрально",
    },
    notifications: NotificationTexts {
        theme_customization: ThemeCustomizationTexts {
            title: "Персонализация Темы",
            message: "Вы предпочитаете использовать стандартные темы или создать папку собственных тем?",
            use_default: "Использовать стандартные",
            use_custom: "Собственные темы",
        },
        background_changed: "Фон успешно обновлен",
        language_changed: "Язык успешно изменен",
        rain_toggled: "Эффект дождя обновлен",
    },
    common: CommonTexts {
        error: "Ошибка",
        success: "Успех",
    },
};
