use crate::modules::notification::service::email::{Mailer, SmtpMailer};
use std::env;
use std::fmt;
use std::sync::Arc;

const DEFAULT_SITE_URL: &str = "https://al-ameen-caps.netlify.app";
const DEFAULT_RESERVATION_EMAIL: &str = "sales@alameencaps.com";
const PAYFAST_SANDBOX_URL: &str = "https://sandbox.payfast.co.za/eng/process";
const PAYFAST_LIVE_URL: &str = "https://www.payfast.co.za/eng/process";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
    pub site_url: String,
}

#[derive(Clone)]
pub struct PayfastContext {
    pub merchant_id: String,
    pub merchant_key: String,
    pub passphrase: Option<String>,
    pub sandbox: bool,
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
}

impl PayfastContext {
    pub fn process_url(&self) -> &'static str {
        match self.sandbox {
            true => PAYFAST_SANDBOX_URL,
            false => PAYFAST_LIVE_URL,
        }
    }
}

#[derive(Clone)]
pub struct MailContext {
    pub sender_name: String,
    pub sender_email: String,
    pub admin_email: Option<String>,
    pub reservation_email: String,
    /// `None` when SMTP credentials are missing.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl MailContext {
    /// Recipient of new reservation notices.
    pub fn reservation_recipient(&self) -> String {
        self.admin_email
            .clone()
            .unwrap_or_else(|| self.reservation_email.clone())
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub payfast: PayfastContext,
    pub mail: MailContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
    pub url: String,
    pub site_url: String,
}

#[derive(Clone)]
pub struct PayfastConfig {
    pub merchant_id: String,
    pub merchant_key: String,
    pub passphrase: Option<String>,
    pub sandbox: bool,
    pub notify_url: Option<String>,
}

#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub admin_email: Option<String>,
    pub reservation_email: String,
}

impl MailConfig {
    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub payfast: PayfastConfig,
    pub mail: MailConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort { name: &'static str, value: String },
    InvalidMailTransport(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => write!(f, "Invalid {} number: {}", name, value),
            Self::InvalidMailTransport(reason) => {
                write!(f, "Failed to set up mail transport: {}", reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_port(name: &'static str, default: &str) -> Result<u16, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { name, value })
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = AppEnvironment::from(
            env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let port = parse_port("PORT", "8000")?;
        let url = non_empty_var("URL").unwrap_or_else(|| format!("http://{}:{}", host, port));
        let site_url = non_empty_var("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let sandbox = match non_empty_var("PAYFAST_SANDBOX") {
            Some(value) => value == "true" || value == "1",
            None => environment != AppEnvironment::Production,
        };

        let mail_port = parse_port("EMAIL_PORT", "587")?;

        Ok(Self {
            app: AppConfig {
                host,
                environment,
                port,
                url: url.trim_end_matches('/').to_string(),
                site_url,
            },
            payfast: PayfastConfig {
                merchant_id: env::var("PAYFAST_MERCHANT_ID").unwrap_or_default(),
                merchant_key: env::var("PAYFAST_MERCHANT_KEY").unwrap_or_default(),
                passphrase: non_empty_var("PAYFAST_PASSPHRASE"),
                sandbox,
                notify_url: non_empty_var("PAYFAST_NOTIFY_URL"),
            },
            mail: MailConfig {
                host: non_empty_var("EMAIL_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                port: mail_port,
                user: env::var("EMAIL_USER").unwrap_or_default(),
                password: env::var("EMAIL_PASS").unwrap_or_default(),
                admin_email: non_empty_var("ADMIN_EMAIL"),
                reservation_email: non_empty_var("RESERVATION_EMAIL")
                    .unwrap_or_else(|| DEFAULT_RESERVATION_EMAIL.to_string()),
            },
        })
    }
}

pub trait ToContext {
    fn to_context(self) -> Result<Context, ConfigError>;
}

impl ToContext for Config {
    fn to_context(self) -> Result<Context, ConfigError> {
        let mailer: Option<Arc<dyn Mailer>> = match self.mail.has_credentials() {
            true => Some(Arc::new(
                SmtpMailer::new(
                    &self.mail.host,
                    self.mail.port,
                    self.mail.user.clone(),
                    self.mail.password.clone(),
                )
                .map_err(|err| ConfigError::InvalidMailTransport(err.to_string()))?,
            )),
            false => {
                tracing::warn!("EMAIL_USER or EMAIL_PASS not set, emails will not be sent");
                None
            }
        };

        let notify_url = self
            .payfast
            .notify_url
            .unwrap_or_else(|| format!("{}/api/payfast/notify", self.app.url));

        Ok(Context {
            payfast: PayfastContext {
                merchant_id: self.payfast.merchant_id,
                merchant_key: self.payfast.merchant_key,
                passphrase: self.payfast.passphrase,
                sandbox: self.payfast.sandbox,
                return_url: format!("{}/success", self.app.site_url),
                cancel_url: format!("{}/cancel", self.app.site_url),
                notify_url,
            },
            mail: MailContext {
                sender_name: String::from("Al-Ameen Caps"),
                sender_email: self.mail.user,
                admin_email: self.mail.admin_email,
                reservation_email: self.mail.reservation_email,
                mailer,
            },
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
                site_url: self.app.site_url,
            },
        })
    }
}
