//! Built-in starter schemas.

use crate::ir::{ArrayRules, Field, FieldKind, NumberRules, Rules, Schema, StringRules};

/// A named starter schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Stable identifier (`"user"`, `"blog-post"`, ...).
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub schema: Schema,
}

const TEMPLATE_IDS: [&str; 8] = [
    "user",
    "product",
    "address",
    "api-response",
    "blog-post",
    "contact-form",
    "login",
    "settings",
];

/// Identifiers of every built-in template, in catalogue order.
pub fn template_ids() -> &'static [&'static str] {
    &TEMPLATE_IDS
}

/// Every built-in template, in catalogue order.
pub fn templates() -> Vec<Template> {
    TEMPLATE_IDS.iter().filter_map(|id| template(id)).collect()
}

/// Look up a template by identifier.
pub fn template(id: &str) -> Option<Template> {
    let (id, name, description, schema) = match id {
        "user" => ("user", "User", "User account with profile information", user()),
        "product" => ("product", "Product", "E-commerce product with pricing and inventory", product()),
        "address" => ("address", "Address", "Postal address", address()),
        "api-response" => ("api-response", "API Response", "Generic API response envelope", api_response()),
        "blog-post" => ("blog-post", "Blog Post", "Blog article with publishing metadata", blog_post()),
        "contact-form" => ("contact-form", "Contact Form", "Contact form submission", contact_form()),
        "login" => ("login", "Login", "Login credentials", login()),
        "settings" => ("settings", "Settings", "User preferences", settings()),
        _ => return None,
    };
    Some(Template {
        id,
        name,
        description,
        schema,
    })
}

fn text(min: Option<u32>, max: Option<u32>) -> Rules {
    Rules::String(StringRules {
        min,
        max,
        ..Default::default()
    })
}

fn exact(length: u32) -> Rules {
    Rules::String(StringRules {
        length: Some(length),
        ..Default::default()
    })
}

fn uuid() -> Rules {
    Rules::String(StringRules {
        uuid: true,
        ..Default::default()
    })
}

fn email() -> Rules {
    Rules::String(StringRules {
        email: true,
        ..Default::default()
    })
}

fn boolean() -> Rules {
    Rules::default_for(FieldKind::Boolean)
}

fn date() -> Rules {
    Rules::default_for(FieldKind::Date)
}

fn string_list() -> Rules {
    Rules::Array(ArrayRules {
        item_type: FieldKind::String,
        ..Default::default()
    })
}

fn user() -> Schema {
    Schema::new("User")
        .with_description("User account with profile information")
        .with_fields(vec![
            Field::required("id", uuid()).with_description("Unique identifier"),
            Field::required("email", email()).with_description("Email address"),
            Field::required("name", text(Some(2), Some(100))).with_description("Full name"),
            Field::required("username", text(Some(3), Some(30))).with_description("Username"),
            Field::optional(
                "age",
                Rules::Number(NumberRules {
                    min: Some(0.0),
                    max: Some(150.0),
                    int: true,
                    ..Default::default()
                }),
            )
            .with_nullable(true)
            .with_description("Age in years"),
            Field::required("isActive", boolean()).with_description("Whether the account is active"),
            Field::required("role", Rules::enumeration(["admin", "user", "guest"]))
                .with_description("Access role"),
            Field::required("createdAt", date()).with_description("Creation timestamp"),
        ])
}

fn product() -> Schema {
    Schema::new("Product")
        .with_description("E-commerce product with pricing and inventory")
        .with_fields(vec![
            Field::required("id", uuid()).with_description("Unique identifier"),
            Field::required("name", text(Some(1), Some(200))).with_description("Product name"),
            Field::optional("description", text(None, Some(2000)))
                .with_nullable(true)
                .with_description("Product description"),
            Field::required(
                "price",
                Rules::Number(NumberRules {
                    min: Some(0.0),
                    nonnegative: true,
                    ..Default::default()
                }),
            )
            .with_description("Unit price"),
            Field::required(
                "quantity",
                Rules::Number(NumberRules {
                    min: Some(0.0),
                    int: true,
                    nonnegative: true,
                    ..Default::default()
                }),
            )
            .with_description("Units in stock"),
            Field::required("sku", text(Some(1), Some(50))).with_description("Stock keeping unit"),
            Field::required(
                "category",
                Rules::enumeration(["electronics", "clothing", "food", "other"]),
            )
            .with_description("Product category"),
            Field::optional("tags", string_list()).with_description("Search tags"),
            Field::required("isAvailable", boolean()).with_description("Whether the product can be ordered"),
        ])
}

fn address() -> Schema {
    Schema::new("Address")
        .with_description("Postal address")
        .with_fields(vec![
            Field::required("street", text(Some(1), Some(200))).with_description("Street line"),
            Field::optional("street2", text(None, Some(100)))
                .with_nullable(true)
                .with_description("Second street line"),
            Field::required("city", text(Some(1), Some(100))).with_description("City"),
            Field::required("state", text(Some(1), Some(100))).with_description("State or region"),
            Field::required("postalCode", text(Some(3), Some(20))).with_description("Postal code"),
            Field::required("country", exact(2)).with_description("ISO 3166-1 alpha-2 country code"),
        ])
}

fn api_response() -> Schema {
    Schema::new("ApiResponse")
        .with_description("Generic API response envelope")
        .with_fields(vec![
            Field::required("success", boolean()).with_description("Whether the request succeeded"),
            Field::optional("message", text(None, Some(500)))
                .with_nullable(true)
                .with_description("Human-readable message"),
            Field::optional("errorCode", text(None, None))
                .with_nullable(true)
                .with_description("Machine-readable error code"),
            Field::required("timestamp", date()).with_description("Response time"),
        ])
}

fn blog_post() -> Schema {
    Schema::new("BlogPost")
        .with_description("Blog article with publishing metadata")
        .with_fields(vec![
            Field::required("id", uuid()).with_description("Unique identifier"),
            Field::required("title", text(Some(1), Some(200))).with_description("Post title"),
            Field::required("slug", text(Some(1), Some(200))).with_description("URL slug"),
            Field::required("content", text(Some(1), None)).with_description("Post body"),
            Field::optional("excerpt", text(None, Some(500)))
                .with_nullable(true)
                .with_description("Short summary"),
            Field::required("authorId", uuid()).with_description("Author identifier"),
            Field::required("status", Rules::enumeration(["draft", "published", "archived"]))
                .with_description("Publishing status"),
            Field::optional("tags", string_list()).with_description("Post tags"),
            Field::optional("publishedAt", date())
                .with_nullable(true)
                .with_description("Publication time"),
            Field::required("createdAt", date()).with_description("Creation time"),
        ])
}

fn contact_form() -> Schema {
    Schema::new("ContactForm")
        .with_description("Contact form submission")
        .with_fields(vec![
            Field::required("name", text(Some(2), Some(100))).with_description("Sender name"),
            Field::required("email", email()).with_description("Reply address"),
            Field::required("subject", text(Some(1), Some(200))).with_description("Subject line"),
            Field::required("message", text(Some(10), Some(5000))).with_description("Message body"),
            Field::optional("phone", text(None, Some(20)))
                .with_nullable(true)
                .with_description("Phone number"),
        ])
}

fn login() -> Schema {
    Schema::new("LoginCredentials")
        .with_description("Login credentials")
        .with_fields(vec![
            Field::required("email", email()).with_description("Account email"),
            Field::required("password", text(Some(8), Some(100))).with_description("Account password"),
            Field::optional("rememberMe", boolean()).with_description("Keep the session alive"),
        ])
}

fn settings() -> Schema {
    Schema::new("Settings")
        .with_description("User preferences")
        .with_fields(vec![
            Field::required("theme", Rules::enumeration(["light", "dark", "system"]))
                .with_description("Colour theme"),
            Field::required("language", exact(2)).with_description("ISO 639-1 language code"),
            Field::required("notifications", boolean()).with_description("Whether notifications are enabled"),
            Field::required(
                "emailDigest",
                Rules::enumeration(["never", "daily", "weekly", "monthly"]),
            )
            .with_description("Digest frequency"),
            Field::required("timezone", text(Some(1), Some(50))).with_description("IANA timezone name"),
        ])
}
