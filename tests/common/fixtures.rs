//! Test fixtures - reusable model declarations.

/// An order with a money price, a validated SKU and an event-posting status
pub const ORDER_MODEL: &str = r#"
[[classes]]
name = "Order"

[[classes.properties]]
name = "price"
value_type = "money"
annotations = [{ kind = "must-satisfy", specifications = ["Positive", "CurrencyCode"] }]

[[classes.properties]]
name = "sku"
value_type = "text"
annotations = [
  { kind = "must-satisfy", specifications = ["NotBlank", "MaxLength(8)"] },
  { kind = "property", must_satisfy = ["MinLength(3)"] },
]

[[classes.properties]]
name = "status"
annotations = [{ kind = "posts-property-changed-event", event = "OrderStatusChanged" }]

[[classes.actions]]
name = "ship"
parameters = ["Address"]
"#;

/// Same order model, YAML syntax, one property only
pub const ORDER_MODEL_YAML: &str = r#"
classes:
  - name: Order
    properties:
      - name: sku
        value_type: text
        annotations:
          - kind: must-satisfy
            specifications: [NotBlank]
"#;

/// A model with one unresolvable rule
pub const BROKEN_RULE_MODEL: &str = r#"
[[classes]]
name = "Customer"

[[classes.properties]]
name = "email"
annotations = [{ kind = "must-satisfy", specifications = ["IsEmail", "NotBlank"] }]
"#;
