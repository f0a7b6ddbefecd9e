//! IAM policy document types.
//!
//! Just enough of the policy grammar to express bucket policies: a document
//! version, statements with effect, principal, actions, and resources, and
//! infallible rendering to the AWS policy JSON shape.

use serde_json::json;

/// Policy language version used for generated documents.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The statement grants access.
    Allow,
    /// The statement denies access.
    Deny,
}

impl Effect {
    /// The wire-format string for this effect.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

/// Statement principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// AWS principals by identifier; `"*"` means any principal.
    Aws(Vec<String>),
}

/// A single policy statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStatement {
    /// The statement effect.
    pub effect: Effect,
    /// The principals the statement applies to.
    pub principal: Principal,
    /// The granted or denied actions.
    pub actions: Vec<String>,
    /// The resources the statement applies to.
    pub resources: Vec<String>,
}

/// An IAM policy document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    /// The policy language version.
    pub version: String,
    /// The policy statements.
    pub statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    /// A public-read policy: any principal may `s3:GetObject` on `resource`.
    #[must_use]
    pub fn public_read(resource: impl Into<String>) -> Self {
        Self {
            version: POLICY_VERSION.to_owned(),
            statements: vec![PolicyStatement {
                effect: Effect::Allow,
                principal: Principal::Aws(vec!["*".to_owned()]),
                actions: vec!["s3:GetObject".to_owned()],
                resources: vec![resource.into()],
            }],
        }
    }

    /// Render the document as AWS policy JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        let statements: Vec<serde_json::Value> = self
            .statements
            .iter()
            .map(|statement| {
                let Principal::Aws(identifiers) = &statement.principal;
                json!({
                    "Effect": statement.effect.as_str(),
                    "Principal": { "AWS": identifiers },
                    "Action": statement.actions,
                    "Resource": statement.resources,
                })
            })
            .collect();
        json!({
            "Version": self.version,
            "Statement": statements,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_public_read_policy_json() {
        let doc = PolicyDocument::public_read("arn:aws:s3:::site-abc123/*");
        let value: serde_json::Value = serde_json::from_str(&doc.to_json()).unwrap();

        assert_eq!(value["Version"], "2012-10-17");
        let statement = &value["Statement"][0];
        assert_eq!(statement["Effect"], "Allow");
        assert_eq!(statement["Principal"]["AWS"][0], "*");
        assert_eq!(statement["Action"][0], "s3:GetObject");
        assert_eq!(statement["Resource"][0], "arn:aws:s3:::site-abc123/*");
    }
}
