//! Inventory bodies shared by the end-to-end tests.
//!
//! Bodies exclude the inventory header; `TestHarness::write_inventory` adds it.

/// Web tier declared with a range pattern and shared variables.
pub const WEB_TIER: &str = r#"hosts:
  - host: web[1-3].example.com
    groups: [web, frontend]
    hostvars:
      http_port: 8080
      env: staging
"#;

/// Database hosts using a list pattern.
pub const DB_TIER: &str = r#"hosts:
  - host: db[1,3-4]
    groups: [db]
    hostvars:
      engine: postgres
"#;

/// Overrides `env` for one web host and adds it to `prod`.
pub const WEB_OVERRIDE: &str = r#"hosts:
  - host: web2.example.com
    groups: [prod]
    hostvars:
      env: prod
"#;

/// Two-dimensional pattern.
pub const RACKS: &str = r#"hosts:
  - host: node[1-2]-rack[5-6]
    groups: [compute]
"#;

/// Host without any group.
pub const LONELY: &str = r#"hosts:
  - host: bastion
    hostvars:
      ansible_user: admin
"#;

/// Declares a non-pattern bracket that must stay literal.
pub const LITERAL_BRACKETS: &str = r#"hosts:
  - host: odd[a-b]
    groups: [odd]
"#;
