// SPDX-FileCopyrightText: 2026 Bookmatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing message texts.
//!
//! Each variant carries its format arguments, so a message is rendered in
//! one place and call sites cannot forget a placeholder.

use bookmatch_core::{Language, UserStatus};

use crate::labels::{status_emoji, status_word};

/// A renderable user-facing message.
#[derive(Debug, Clone, Copy)]
pub enum Msg<'a> {
    Welcome,
    LanguageSelection,
    LanguageSelected,
    MainMenu,

    RegistrationStart,
    RegistrationAuthor,
    RegistrationCondition,
    ConditionReprompt,
    RegistrationCancelled,
    RegistrationAddAnother { remaining: usize },
    RegistrationComplete,

    BookAddTitle,
    BookAddCancelled,
    BookAddSuccess,
    BookLimitReached,

    BookManagementHeader,
    ManageNoBooks,
    BookSelectRemove,
    BooksHeader,
    BooksRemaining { remaining: usize },
    SelectOption,
    BookItem { index: usize, title: &'a str, author: &'a str, condition: &'a str },
    DeleteConfirm { title: &'a str, author: &'a str },
    BookDeleted { title: &'a str },

    ProfileDetails { name: &'a str, status: UserStatus },
    ProfileNoBooks,
    StatusUpdated { status: UserStatus },

    BrowseNoBooks,
    BrowseNoMore,
    BrowseCancelled,
    BrowseLiked,
    BrowseSkipped,
    BrowseSessionExpired,
    BrowseUserHeader { name: &'a str },
    BrowseQuestion,

    MatchNotification { name: &'a str, books: &'a str, contact: &'a str },
    MatchNotificationOther { name: &'a str, books: &'a str, contact: &'a str },
    ContactNoUsername,

    MatchesEmpty,
    MatchesHeader,
    MatchesFooter,
    MatchItem { index: usize, name: &'a str, books: &'a str, contact: &'a str },

    Help,

    ErrorGeneric,
    ErrorNotRegistered,
    ErrorInvalidInput,
    ErrorBookNotFound,
    ErrorUserNotFound,
}

impl Msg<'_> {
    /// Render this message in the given language.
    pub fn render(&self, lang: Language) -> String {
        match lang {
            Language::En => self.render_en(),
            Language::Ru => self.render_ru(),
        }
    }

    fn render_en(&self) -> String {
        match *self {
            Msg::Welcome => {
                "Welcome to Book Exchange! 📚\n\nPlease select your language:".into()
            }
            Msg::LanguageSelection => "Please select your language:".into(),
            Msg::LanguageSelected => {
                "Language set to English. You can change it anytime from the main menu.".into()
            }
            Msg::MainMenu => "Main Menu".into(),

            Msg::RegistrationStart => {
                "Let's set up your profile. Please add your first book by sending its title."
                    .into()
            }
            Msg::RegistrationAuthor => "Great! Now please send me the author's name.".into(),
            Msg::RegistrationCondition => {
                "Thanks! How would you rate the book's condition?\nChoose one of the options below:"
                    .into()
            }
            Msg::ConditionReprompt => {
                "Please choose one of the provided options:".into()
            }
            Msg::RegistrationCancelled => {
                "Registration cancelled. You can start over anytime.".into()
            }
            Msg::RegistrationAddAnother { remaining } => format!(
                "Book added! Would you like to add another book? You can add {remaining} more books."
            ),
            Msg::RegistrationComplete => {
                "Perfect! Your profile is all set up. 🎉\n\nUse the menu below to navigate:".into()
            }

            Msg::BookAddTitle => "Let's add a new book! Please send me the title.".into(),
            Msg::BookAddCancelled => "Adding book cancelled.".into(),
            Msg::BookAddSuccess => {
                "📚 Book added successfully!\n\nWhat would you like to do next?".into()
            }
            Msg::BookLimitReached => {
                "You can only have up to 3 books at a time. Please remove a book first.".into()
            }

            Msg::BookManagementHeader => "📚 Book Management".into(),
            Msg::ManageNoBooks => {
                "You don't have any books yet! Use the Add Book button to add your first book."
                    .into()
            }
            Msg::BookSelectRemove => "Select a book to remove or add a new book:".into(),
            Msg::BooksHeader => "Your Books:".into(),
            Msg::BooksRemaining { remaining } => {
                format!("You can add {remaining} more book(s).")
            }
            Msg::SelectOption => "Select an option below:".into(),
            Msg::BookItem { index, title, author, condition } => format!(
                "📚 Book {index}:\nTitle: {title}\nAuthor: {author}\nCondition: {condition}"
            ),
            Msg::DeleteConfirm { title, author } => format!(
                "Are you sure you want to delete this book?\n\nTitle: {title}\nAuthor: {author}"
            ),
            Msg::BookDeleted { title } => format!("Book \"{title}\" has been deleted."),

            Msg::ProfileDetails { name, status } => format!(
                "Profile Details:\nName: {name}\nStatus: {} {}",
                status_emoji(status),
                status_word(status, Language::En)
            ),
            Msg::ProfileNoBooks => {
                "You don't have any books yet! Add books to start exchanging.".into()
            }
            Msg::StatusUpdated { status } => format!(
                "Your status has been updated to: {} {}\n\n{}",
                status_emoji(status),
                status_word(status, Language::En),
                match status {
                    UserStatus::Active => "Your books are now visible to other users.",
                    UserStatus::Inactive => "Your books are now hidden from other users.",
                }
            ),

            Msg::BrowseNoBooks => {
                "You need to add at least one book before you can browse! Use the 📕 Add Book button to add your first book."
                    .into()
            }
            Msg::BrowseNoMore => {
                "No more books available right now. Check back later! 📚".into()
            }
            Msg::BrowseCancelled => "Browsing cancelled.".into(),
            Msg::BrowseLiked => "👍 You liked this book!".into(),
            Msg::BrowseSkipped => "👎 Skipped this book.".into(),
            Msg::BrowseSessionExpired => {
                "Session expired. Please start browsing again.".into()
            }
            Msg::BrowseUserHeader { name } => format!("Books from {name}:"),
            Msg::BrowseQuestion => "What do you think of these books?".into(),

            Msg::MatchNotification { name, books, contact } => format!(
                "It's a match! 🎉\n\nYou and {name} both liked each other's books!\n\n{books}\nYou can contact {contact} directly through Telegram to arrange your book exchange."
            ),
            Msg::MatchNotificationOther { name, books, contact } => format!(
                "🎉 Book Match! 🎉\n\nYou've matched with {name}!\n\nThey like your books and you like their books:\n\n{books}\nYou can now contact {contact} directly through Telegram to arrange your book exchange."
            ),
            Msg::ContactNoUsername => "this user (they don't have a username)".into(),

            Msg::MatchesEmpty => {
                "You don't have any matches yet. 🤔\nUse /browse to discover more books!".into()
            }
            Msg::MatchesHeader => "Your Matches 🤝".into(),
            Msg::MatchesFooter => {
                "Start a conversation to arrange your book exchange!".into()
            }
            Msg::MatchItem { index, name, books, contact } => format!(
                "Match #{index}:\nUser: {name}\nBooks:\n{books}\nContact: {contact}\n------------------"
            ),

            Msg::Help => [
                "📚 Book Exchange Bot - Help Guide",
                "Welcome to Book Exchange! Use the keyboard menu below to navigate:",
                "📚 Browse Books - Discover and like books from other users\n📋 My Profile - Manage your profile, status, and books\nℹ️ Help - Show this help message\n🌐 Language - Change your language",
                "💡 Profile Management:\n• Toggle your active/inactive status\n• Add new books (up to 3 total)\n• Manage your existing books",
                "💡 Book Exchange Process:\n• Add books to your profile\n• Browse books from other users\n• Like books that interest you\n• When you and another user both like each other's books, it's a match!\n• After a match, you'll receive the other user's contact details\n• Contact them directly through Telegram to arrange your exchange",
                "Happy book exchanging! 📖",
            ]
            .join("\n\n"),

            Msg::ErrorGeneric => {
                "Sorry, something went wrong. Please try again later.".into()
            }
            Msg::ErrorNotRegistered => "Please use /start to register first!".into(),
            Msg::ErrorInvalidInput => "Invalid input. Please try again.".into(),
            Msg::ErrorBookNotFound => "Book not found. Please try again.".into(),
            Msg::ErrorUserNotFound => {
                "User not found. Please use /start to register.".into()
            }
        }
    }

    fn render_ru(&self) -> String {
        match *self {
            Msg::Welcome => {
                "Добро пожаловать в Book Exchange! 📚\n\nПожалуйста, выберите язык:".into()
            }
            Msg::LanguageSelection => "Пожалуйста, выберите язык:".into(),
            Msg::LanguageSelected => {
                "Язык установлен на русский. Вы можете изменить его в любое время из главного меню."
                    .into()
            }
            Msg::MainMenu => "Главное меню".into(),

            Msg::RegistrationStart => {
                "Давайте настроим ваш профиль. Добавьте свою первую книгу, отправив ее название."
                    .into()
            }
            Msg::RegistrationAuthor => {
                "Отлично! Теперь, пожалуйста, отправьте имя автора.".into()
            }
            Msg::RegistrationCondition => {
                "Спасибо! Как бы вы оценили состояние книги?\nВыберите один из вариантов ниже:"
                    .into()
            }
            Msg::ConditionReprompt => {
                "Пожалуйста, выберите один из предложенных вариантов:".into()
            }
            Msg::RegistrationCancelled => {
                "Регистрация отменена. Вы можете начать заново в любое время.".into()
            }
            Msg::RegistrationAddAnother { remaining } => format!(
                "Книга добавлена! Хотите добавить еще одну книгу? Вы можете добавить еще {remaining} книг(и)."
            ),
            Msg::RegistrationComplete => {
                "Отлично! Ваш профиль настроен. 🎉\n\nИспользуйте меню ниже для навигации:".into()
            }

            Msg::BookAddTitle => {
                "Давайте добавим новую книгу! Пожалуйста, отправьте название.".into()
            }
            Msg::BookAddCancelled => "Добавление книги отменено.".into(),
            Msg::BookAddSuccess => {
                "📚 Книга успешно добавлена!\n\nЧто бы вы хотели сделать дальше?".into()
            }
            Msg::BookLimitReached => {
                "Вы можете иметь не более 3 книг одновременно. Пожалуйста, удалите книгу.".into()
            }

            Msg::BookManagementHeader => "📚 Управление книгами".into(),
            Msg::ManageNoBooks => {
                "У вас еще нет книг! Используйте кнопку Добавить книгу, чтобы добавить первую."
                    .into()
            }
            Msg::BookSelectRemove => {
                "Выберите книгу для удаления или добавьте новую книгу:".into()
            }
            Msg::BooksHeader => "Ваши книги:".into(),
            Msg::BooksRemaining { remaining } => {
                format!("Вы можете добавить еще {remaining} книг(и).")
            }
            Msg::SelectOption => "Выберите опцию ниже:".into(),
            Msg::BookItem { index, title, author, condition } => format!(
                "📚 Книга {index}:\nНазвание: {title}\nАвтор: {author}\nСостояние: {condition}"
            ),
            Msg::DeleteConfirm { title, author } => format!(
                "Вы уверены, что хотите удалить эту книгу?\n\nНазвание: {title}\nАвтор: {author}"
            ),
            Msg::BookDeleted { title } => format!("Книга \"{title}\" была удалена."),

            Msg::ProfileDetails { name, status } => format!(
                "Детали профиля:\nИмя: {name}\nСтатус: {} {}",
                status_emoji(status),
                status_word(status, Language::Ru)
            ),
            Msg::ProfileNoBooks => {
                "У вас еще нет книг! Добавьте книги, чтобы начать обмен.".into()
            }
            Msg::StatusUpdated { status } => format!(
                "Ваш статус обновлен: {} {}\n\n{}",
                status_emoji(status),
                status_word(status, Language::Ru),
                match status {
                    UserStatus::Active => "Ваши книги теперь видны другим пользователям.",
                    UserStatus::Inactive => "Ваши книги теперь скрыты от других пользователей.",
                }
            ),

            Msg::BrowseNoBooks => {
                "Вам нужно добавить хотя бы одну книгу, прежде чем вы сможете просматривать! Используйте кнопку 📕 Добавить книгу."
                    .into()
            }
            Msg::BrowseNoMore => "Сейчас нет доступных книг. Проверьте позже! 📚".into(),
            Msg::BrowseCancelled => "Просмотр отменен.".into(),
            Msg::BrowseLiked => "👍 Вам понравилась эта книга!".into(),
            Msg::BrowseSkipped => "👎 Книга пропущена.".into(),
            Msg::BrowseSessionExpired => {
                "Сессия истекла. Пожалуйста, начните просмотр снова.".into()
            }
            Msg::BrowseUserHeader { name } => format!("Книги от {name}:"),
            Msg::BrowseQuestion => "Что вы думаете об этих книгах?".into(),

            Msg::MatchNotification { name, books, contact } => format!(
                "Совпадение! 🎉\n\nВы и {name} оба понравились книги друг друга!\n\n{books}\nВы можете связаться с {contact} напрямую через Telegram, чтобы договориться об обмене книгами."
            ),
            Msg::MatchNotificationOther { name, books, contact } => format!(
                "🎉 Совпадение по книге! 🎉\n\nУ вас совпадение с {name}!\n\nИм нравятся ваши книги, а вам нравятся их книги:\n\n{books}\nТеперь вы можете связаться с {contact} напрямую через Telegram, чтобы договориться об обмене книгами."
            ),
            Msg::ContactNoUsername => {
                "этот пользователь (у него нет имени пользователя)".into()
            }

            Msg::MatchesEmpty => {
                "У вас пока нет совпадений. 🤔\nИспользуйте /browse, чтобы найти больше книг!"
                    .into()
            }
            Msg::MatchesHeader => "Ваши совпадения 🤝".into(),
            Msg::MatchesFooter => {
                "Начните разговор, чтобы договориться об обмене книгами!".into()
            }
            Msg::MatchItem { index, name, books, contact } => format!(
                "Совпадение #{index}:\nПользователь: {name}\nКниги:\n{books}\nКонтакт: {contact}\n------------------"
            ),

            Msg::Help => [
                "📚 Book Exchange Bot - Руководство",
                "Добро пожаловать в Book Exchange! Используйте меню клавиатуры ниже для навигации:",
                "📚 Искать книги - Находите и отмечайте понравившиеся книги\n📋 Мой профиль - Управляйте профилем, статусом и книгами\nℹ️ Помощь - Показать это сообщение\n🌐 Язык - Изменить язык",
                "💡 Управление профилем:\n• Переключайте статус активен/неактивен\n• Добавляйте новые книги (до 3 всего)\n• Управляйте существующими книгами",
                "💡 Процесс обмена книгами:\n• Добавьте книги в свой профиль\n• Просматривайте книги других пользователей\n• Отмечайте понравившиеся книги\n• Когда вы и другой пользователь оба отметили книги друг друга, это совпадение!\n• После совпадения вы получите контактные данные другого пользователя\n• Свяжитесь с ними напрямую через Telegram, чтобы договориться об обмене",
                "Приятного обмена книгами! 📖",
            ]
            .join("\n\n"),

            Msg::ErrorGeneric => {
                "Извините, что-то пошло не так. Пожалуйста, попробуйте позже.".into()
            }
            Msg::ErrorNotRegistered => {
                "Пожалуйста, используйте /start для регистрации!".into()
            }
            Msg::ErrorInvalidInput => "Неверный ввод. Пожалуйста, попробуйте снова.".into(),
            Msg::ErrorBookNotFound => {
                "Книга не найдена. Пожалуйста, попробуйте снова.".into()
            }
            Msg::ErrorUserNotFound => {
                "Пользователь не найден. Пожалуйста, используйте /start для регистрации.".into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_arguments_are_interpolated() {
        let msg = Msg::RegistrationAddAnother { remaining: 2 }.render(Language::En);
        assert!(msg.contains("add 2 more books"), "got: {msg}");

        let msg = Msg::BookDeleted { title: "Dune" }.render(Language::Ru);
        assert!(msg.contains("\"Dune\""), "got: {msg}");
    }

    #[test]
    fn both_catalogs_render_every_simple_message() {
        let simple = [
            Msg::Welcome,
            Msg::MainMenu,
            Msg::RegistrationStart,
            Msg::BrowseNoMore,
            Msg::Help,
            Msg::ErrorGeneric,
        ];
        for msg in simple {
            assert!(!msg.render(Language::En).is_empty());
            assert!(!msg.render(Language::Ru).is_empty());
            assert_ne!(msg.render(Language::En), msg.render(Language::Ru));
        }
    }

    #[test]
    fn status_update_mentions_visibility() {
        let active = Msg::StatusUpdated { status: UserStatus::Active }.render(Language::En);
        assert!(active.contains("visible"));
        let inactive = Msg::StatusUpdated { status: UserStatus::Inactive }.render(Language::En);
        assert!(inactive.contains("hidden"));
    }
}
