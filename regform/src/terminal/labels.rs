use libregform::domain::{core::fields::Field, registration::messages::Locale};

/// Fixed interface texts of the form.
pub struct Labels {
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub password: &'static str,
    pub password_confirmation: &'static str,
    pub password_placeholder: &'static str,
    pub reset: &'static str,
    pub submit: &'static str,
    pub disabled: &'static str,
    pub submit_disabled: &'static str,
    pub submitted: &'static str,
    pub help: &'static str,
}

const RU: Labels = Labels {
    email: "Введите email:",
    email_placeholder: "Почта",
    password: "Введите пароль:",
    password_confirmation: "Введите пароль повторно:",
    password_placeholder: "Пароль",
    reset: "Сброс",
    submit: "Зарегистрироваться",
    disabled: "недоступно",
    submit_disabled: "Исправьте ошибки перед отправкой.",
    submitted: "Данные отправлены.",
    help: "Команды: email <значение>, password1 <значение>, password2 <значение>, submit, reset, help, quit",
};

const EN: Labels = Labels {
    email: "Enter email:",
    email_placeholder: "Email",
    password: "Enter password:",
    password_confirmation: "Repeat password:",
    password_placeholder: "Password",
    reset: "Reset",
    submit: "Register",
    disabled: "disabled",
    submit_disabled: "Fix the errors before submitting.",
    submitted: "Form submitted.",
    help: "Commands: email <value>, password1 <value>, password2 <value>, submit, reset, help, quit",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    pub fn label(&self, field: Field) -> &'static str {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::PasswordConfirmation => self.password_confirmation,
        }
    }

    pub fn placeholder(&self, field: Field) -> &'static str {
        match field {
            Field::Email => self.email_placeholder,
            Field::Password | Field::PasswordConfirmation => self.password_placeholder,
        }
    }
}
