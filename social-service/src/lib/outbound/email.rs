pub mod mailgun;

pub use mailgun::MailgunEmailSender;
