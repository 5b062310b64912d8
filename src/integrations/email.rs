//! Transactional email through an EmailJS-style HTTP endpoint.

use super::{http_agent, http_error};
use crate::config::{ENV_EMAIL_USER_ID, EmailConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{Client, Employee, Project};
use crate::utils::formatting::format_currency;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub to_email: String,
    pub to_name: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Records that can be notified by email.
pub trait Notifiable {
    fn message(&self, currency: &str) -> TemplateParams;
}

impl Notifiable for Client {
    fn message(&self, currency: &str) -> TemplateParams {
        TemplateParams {
            to_email: self.email.clone(),
            to_name: self.full_name(),
            subject: format!("Payment reminder: {}", self.project),
            message: format!(
                "Dear {}, the amount of {} for project '{}' is due on {}.",
                self.full_name(),
                format_currency(self.invoice_amount, currency),
                self.project,
                self.deadline.format("%Y-%m-%d")
            ),
        }
    }
}

impl Notifiable for Project {
    fn message(&self, _currency: &str) -> TemplateParams {
        TemplateParams {
            to_email: self.client_email.clone(),
            to_name: self.client_name.clone(),
            subject: format!("Project update: {}", self.name),
            message: format!(
                "Dear {}, your project '{}' in {} is now '{}'. Planned end date: {}.",
                self.client_name,
                self.name,
                self.location,
                self.status.as_str(),
                self.end_date.format("%Y-%m-%d")
            ),
        }
    }
}

impl Notifiable for Employee {
    fn message(&self, _currency: &str) -> TemplateParams {
        TemplateParams {
            to_email: self.email.clone(),
            to_name: self.full_name(),
            subject: "Your employee record".to_string(),
            message: format!(
                "Dear {}, you are registered as {} in the {} department.",
                self.full_name(),
                self.position,
                self.department
            ),
        }
    }
}

pub fn build_payload(cfg: &EmailConfig, params: TemplateParams) -> AppResult<EmailPayload> {
    let user_id = cfg
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            AppError::Config(format!(
                "no email user id: set email.user_id or {}",
                ENV_EMAIL_USER_ID
            ))
        })?;

    Ok(EmailPayload {
        service_id: cfg.service_id.clone(),
        template_id: cfg.template_id.clone(),
        user_id: user_id.to_string(),
        template_params: params,
    })
}

/// POST the payload once. Any non-2xx answer is an error.
pub fn send(cfg: &EmailConfig, payload: &EmailPayload) -> AppResult<()> {
    let body = serde_json::to_string(payload)
        .map_err(|e| AppError::Http(format!("email: cannot encode payload: {e}")))?;

    http_agent(cfg.timeout_secs)
        .post(&cfg.endpoint)
        .set("Content-Type", "application/json")
        .send_string(&body)
        .map_err(|e| http_error("email", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::ProjectStatus;
    use crate::utils::date::parse_date;

    fn client() -> Client {
        Client {
            id: "C001".into(),
            last_name: "Jaziri".into(),
            first_name: "Sami".into(),
            phone: "22333444".into(),
            email: "sami@example.com".into(),
            project: "Villa".into(),
            invoice_amount: 25000.0,
            deadline: parse_date("2024-12-20").unwrap(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn client_message_mentions_amount_and_deadline() {
        let p = client().message("$");
        assert_eq!(p.to_email, "sami@example.com");
        assert!(p.message.contains("$25,000.00"));
        assert!(p.message.contains("2024-12-20"));
    }

    #[test]
    fn project_message_mentions_status() {
        let project = Project {
            id: "P1".into(),
            name: "Villa".into(),
            client_email: "o@example.com".into(),
            start_date: parse_date("2024-01-01").unwrap(),
            end_date: parse_date("2024-06-01").unwrap(),
            status: ProjectStatus::OnHold,
            budget: 1.0,
            client_name: "Owner".into(),
            location: "Tunis".into(),
        };
        let p = project.message("$");
        assert_eq!(p.to_name, "Owner");
        assert!(p.message.contains("On Hold"));
        assert!(p.message.contains("2024-06-01"));
    }

    #[test]
    fn payload_serializes_with_template_params() {
        let cfg = EmailConfig {
            user_id: Some("pub_123".into()),
            ..EmailConfig::default()
        };
        let payload = build_payload(&cfg, client().message("$")).unwrap();
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["user_id"], "pub_123");
        assert_eq!(v["service_id"], cfg.service_id.as_str());
        assert_eq!(v["template_params"]["to_email"], "sami@example.com");
        assert!(v["template_params"]["subject"].is_string());
    }

    #[test]
    fn missing_user_id_is_a_config_error() {
        let res = build_payload(&EmailConfig::default(), client().message("$"));
        assert!(matches!(res, Err(AppError::Config(_))));
    }
}
