use super::form::ContactForm;
use crate::config::ContactConfig;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS names the public key `user_id`.
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Variables made available to the email template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub service: String,
    pub budget: String,
    pub idea: String,
    pub from_name: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn from_form(form: &ContactForm) -> Self {
        // The budget field is hidden for unpaid services; don't leak a stale value.
        let budget = if form.budget_required() {
            form.budget.clone()
        } else {
            String::new()
        };
        TemplateParams {
            name: form.name.clone(),
            email: form.email.clone(),
            service: form
                .service
                .map(|s| s.wire_value().to_string())
                .unwrap_or_default(),
            budget,
            idea: form.idea.clone(),
            from_name: form.name.clone(),
            reply_to: form.email.clone(),
        }
    }
}

impl EmailRequest {
    pub fn new(config: &ContactConfig, form: &ContactForm) -> Self {
        EmailRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams::from_form(form),
        }
    }
}

/// Delivers contact submissions through the email API.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    config: ContactConfig,
}

impl EmailClient {
    pub fn new(config: ContactConfig) -> Self {
        EmailClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn request_for(&self, form: &ContactForm) -> EmailRequest {
        EmailRequest::new(&self.config, form)
    }

    /// Issue exactly one delivery attempt. Any non-success status fails.
    pub async fn send(&self, request: EmailRequest) -> Result<()> {
        if !self.config.has_credentials() {
            bail!("Email delivery is not configured (service id, template id or public key missing)");
        }
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to reach email API at {}", self.config.endpoint))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Email API rejected the message ({status}): {}", body.trim());
        }
        info!(
            service = %request.template_params.service,
            "Contact message delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Service;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const REJECTION: &str = "The template ID is invalid";

    fn sample_form() -> ContactForm {
        ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            service: Some(Service::WebDevelopment),
            budget: "500".into(),
            idea: "Portfolio site\n".into(),
        }
    }

    fn sample_config() -> ContactConfig {
        ContactConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
            ..ContactConfig::default()
        }
    }

    fn client_for(endpoint: String) -> EmailClient {
        EmailClient::new(ContactConfig {
            endpoint,
            ..sample_config()
        })
    }

    /// Accept one HTTP request, answer with `status_line`, and yield the
    /// request body.
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            let body_start = loop {
                let n = socket.read(&mut chunk).await.expect("read headers");
                assert!(n > 0, "connection closed before headers");
                raw.extend_from_slice(&chunk[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let headers = String::from_utf8_lossy(&raw[..body_start]).to_ascii_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while raw.len() < body_start + length {
                let n = socket.read(&mut chunk).await.expect("read body");
                assert!(n > 0, "connection closed before body");
                raw.extend_from_slice(&chunk[..n]);
            }
            let reply = format!(
                "{status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{REJECTION}",
                REJECTION.len()
            );
            socket.write_all(reply.as_bytes()).await.expect("write reply");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw[body_start..body_start + length]).into_owned()
        });
        (format!("http://{addr}/api/v1.0/email/send"), handle)
    }

    #[test]
    fn request_body_carries_form_and_canonical_fields() {
        let request = EmailRequest::new(&sample_config(), &sample_form());
        let json = serde_json::to_value(&request).expect("serializes");
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "pk");
        let params = &json["template_params"];
        assert_eq!(params["name"], " Ada ");
        assert_eq!(params["from_name"], " Ada ");
        assert_eq!(params["email"], "ada@example.com");
        assert_eq!(params["reply_to"], "ada@example.com");
        assert_eq!(params["service"], "Web Development");
        assert_eq!(params["budget"], "500");
        assert_eq!(params["idea"], "Portfolio site\n");
    }

    #[test]
    fn hidden_budget_is_not_sent() {
        let mut form = sample_form();
        form.service = Some(Service::Other);
        let params = TemplateParams::from_form(&form);
        assert_eq!(params.service, "other");
        assert_eq!(params.budget, "");
    }

    #[tokio::test]
    async fn missing_credentials_fail_without_network() {
        let client = EmailClient::new(ContactConfig::default());
        let request = client.request_for(&sample_form());
        let err = client.send(request).await.expect_err("unconfigured client");
        assert!(err.to_string().contains("not configured"), "{err:#}");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_failure() {
        let client = client_for("http://127.0.0.1:1/api/v1.0/email/send".into());
        let request = client.request_for(&sample_form());
        let err = client.send(request).await.expect_err("nothing listens on port 1");
        assert!(err.to_string().contains("Failed to reach email API"), "{err:#}");
    }

    #[tokio::test]
    async fn rejected_status_is_a_failure() {
        let (endpoint, server) = serve_once("HTTP/1.1 400 Bad Request").await;
        let client = client_for(endpoint);
        let request = client.request_for(&sample_form());
        let err = client.send(request).await.expect_err("400 is not delivered");
        let message = err.to_string();
        assert!(message.contains("400"), "{message}");
        assert!(message.contains(REJECTION), "{message}");

        let body = server.await.expect("server task");
        let posted: serde_json::Value = serde_json::from_str(&body).expect("json body");
        assert_eq!(posted["user_id"], "pk");
        assert_eq!(posted["template_params"]["from_name"], " Ada ");
        assert_eq!(posted["template_params"]["reply_to"], "ada@example.com");
    }

    #[tokio::test]
    async fn success_status_is_delivered() {
        let (endpoint, server) = serve_once("HTTP/1.1 200 OK").await;
        let client = client_for(endpoint);
        let request = client.request_for(&sample_form());
        client.send(request).await.expect("delivered");
        let body = server.await.expect("server task");
        assert!(body.contains("\"service_id\":\"svc\""), "{body}");
    }
}
