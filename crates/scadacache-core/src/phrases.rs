//! Locale-selected text for diagnostics, built-in role names and login
//! rejections.

use crate::config::Locale;

/// All user-visible phrases of the core crate for one locale.
#[derive(Debug)]
pub struct Phrases {
    pub disabled_role: &'static str,
    pub admin_role: &'static str,
    pub dispatcher_role: &'static str,
    pub guest_role: &'static str,
    pub app_role: &'static str,
    pub custom_role: &'static str,
    pub err_role: &'static str,
    pub unknown_role: &'static str,

    pub channel_properties_error: &'static str,
    pub control_channel_properties_error: &'static str,
    pub user_id_error: &'static str,
    pub role_name_error: &'static str,

    pub wrong_password: &'static str,
    pub no_rights: &'static str,
    pub illegal_role: &'static str,
    pub server_unavailable: &'static str,
}

pub const EN: Phrases = Phrases {
    disabled_role: "Disabled",
    admin_role: "Administrator",
    dispatcher_role: "Dispatcher",
    guest_role: "Guest",
    app_role: "Application",
    custom_role: "Custom role",
    err_role: "Error",
    unknown_role: "Unknown role",

    channel_properties_error: "Error getting input channel properties",
    control_channel_properties_error: "Error getting output channel properties",
    user_id_error: "Error getting user ID by name",
    role_name_error: "Error getting role name by ID",

    wrong_password: "Wrong username or password",
    no_rights: "Insufficient rights",
    illegal_role: "Unable to login with an application role",
    server_unavailable: "Server is unavailable",
};

pub const RU: Phrases = Phrases {
    disabled_role: "Отключен",
    admin_role: "Администратор",
    dispatcher_role: "Диспетчер",
    guest_role: "Гость",
    app_role: "Приложение",
    custom_role: "Пользовательская роль",
    err_role: "Ошибка",
    unknown_role: "Неизвестная роль",

    channel_properties_error: "Ошибка при получении свойств входного канала",
    control_channel_properties_error: "Ошибка при получении свойств канала управления",
    user_id_error: "Ошибка при получении идентификатора пользователя по имени",
    role_name_error: "Ошибка при получении наименования роли по идентификатору",

    wrong_password: "Неверное имя пользователя или пароль",
    no_rights: "Недостаточно прав",
    illegal_role: "Невозможно войти в систему с ролью приложения",
    server_unavailable: "Сервер недоступен",
};

impl Phrases {
    pub const fn for_locale(locale: Locale) -> &'static Phrases {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}
