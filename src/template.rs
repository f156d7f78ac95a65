//! Built-in feature skeletons.
//!
//! Each skeleton is fixed MiniJinja source. Values derived from the feature
//! name only ever enter through [`TemplateContext`], so no user input is
//! evaluated as template code.

use crate::constants::FILE_EXTENSION;
use crate::name::{NameCasing, ValidatedName};

/// A generated file: the suffix between the feature name and the extension,
/// plus the skeleton it is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    pub suffix: &'static str,
    pub source: &'static str,
}

impl FileTemplate {
    /// `user-profile` + `api` -> `user-profile.api.ts`
    pub fn file_name(&self, name: &ValidatedName) -> String {
        format!("{}.{}.{}", name, self.suffix, FILE_EXTENSION)
    }
}

const API_TEMPLATE: &str = r#"// {{ pascal_case }} API endpoints
import { api } from "@/shared/libs/api.service";
import { {{ pascal_case }}Payload } from "./{{ name }}.type";

export const {{ camel_case }}Api = {
  // Add your API methods here
  example: (body: {{ pascal_case }}Payload) => api.post("/{{ name }}", body),
};
"#;

const SERVICE_TEMPLATE: &str = r#"// {{ pascal_case }} service layer
import { {{ pascal_case }}Payload } from "./{{ name }}.type";
import * as api from "./{{ name }}.api";
import { {{ camel_case }}Schema } from "./{{ name }}.validation";

export const {{ camel_case }}Service = {
  async example(payload: {{ pascal_case }}Payload) {
    {{ camel_case }}Schema.parse(payload);
    return api.{{ camel_case }}Api.example(payload);
  },
};
"#;

const TYPE_TEMPLATE: &str = r#"// {{ pascal_case }} TypeScript types and interfaces
export interface {{ pascal_case }}Payload {
  // Define your payload types
}
"#;

const VALIDATION_TEMPLATE: &str = r#"// {{ pascal_case }} Zod validation schemas
import z from "zod";

export const {{ camel_case }}Schema = z.object({
  // Define your validation schema
});

export type {{ pascal_case }}SchemaT = z.infer<typeof {{ camel_case }}Schema>;
"#;

const STORE_TEMPLATE: &str = r#"// {{ pascal_case }} store logic
// Add your store implementation here (e.g., Zustand, Redux, etc.)
"#;

/// The five files of every feature, in write order.
pub const FEATURE_TEMPLATES: [FileTemplate; 5] = [
    FileTemplate { suffix: "api", source: API_TEMPLATE },
    FileTemplate { suffix: "service", source: SERVICE_TEMPLATE },
    FileTemplate { suffix: "type", source: TYPE_TEMPLATE },
    FileTemplate { suffix: "validation", source: VALIDATION_TEMPLATE },
    FileTemplate { suffix: "store", source: STORE_TEMPLATE },
];

/// Variables available to every skeleton.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub camel_case: &'a str,
    pub pascal_case: &'a str,
}

impl<'a> TemplateContext<'a> {
    pub fn new(name: &'a ValidatedName, casing: &'a NameCasing) -> Self {
        Self {
            name: name.as_str(),
            camel_case: &casing.camel_case,
            pascal_case: &casing.pascal_case,
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "camel_case": self.camel_case,
            "pascal_case": self.pascal_case,
        })
    }
}
