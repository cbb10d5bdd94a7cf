//! Registrable C# targets.

use std::sync::Arc;

use typeloom_codegen::{
    TargetRegistry, TypeTablesBuilder,
    language::{
        DeclarationSyntax, EnumLiteralSyntax, NamingConvention, SupportingFile, Target,
        TargetOption,
    },
};

use crate::{
    naming::CSHARP_NAMING,
    render::{CSharpDeclarations, CSharpEnumLiterals},
    tables::{activity_tables, client_tables},
};

/// Option naming the generated project.
pub const PROJECT_NAME: &str = "projectName";

/// Activity client target, `csharp-activity`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityTarget;

impl Target for ActivityTarget {
    fn name(&self) -> &'static str {
        "csharp-activity"
    }

    fn help(&self) -> &'static str {
        "Generates a csharp activity client."
    }

    fn tables(&self) -> TypeTablesBuilder {
        activity_tables()
    }

    fn declarations(&self) -> Arc<dyn DeclarationSyntax> {
        Arc::new(CSharpDeclarations)
    }

    fn literals(&self) -> Arc<dyn EnumLiteralSyntax> {
        Arc::new(CSharpEnumLiterals)
    }

    fn naming(&self) -> NamingConvention {
        CSHARP_NAMING
    }

    fn options(&self) -> Vec<TargetOption> {
        vec![
            TargetOption {
                name: PROJECT_NAME,
                description: "C# project name",
                default: None,
            },
            TargetOption {
                name: "netCoreProjectFile",
                description: "Use the new-style project file format",
                default: Some("true"),
            },
            TargetOption {
                name: "supportNullable",
                description: "Declare optional value types as nullable",
                default: Some("true"),
            },
        ]
    }

    fn supporting_files(&self) -> Vec<SupportingFile> {
        vec![SupportingFile::new("IActivity.mustache", "", "IActivities.json")]
    }
}

/// Plain client target, `csharp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientTarget;

impl Target for ClientTarget {
    fn name(&self) -> &'static str {
        "csharp"
    }

    fn help(&self) -> &'static str {
        "Generates a csharp client."
    }

    fn tables(&self) -> TypeTablesBuilder {
        client_tables()
    }

    fn declarations(&self) -> Arc<dyn DeclarationSyntax> {
        Arc::new(CSharpDeclarations)
    }

    fn literals(&self) -> Arc<dyn EnumLiteralSyntax> {
        Arc::new(CSharpEnumLiterals)
    }

    fn naming(&self) -> NamingConvention {
        CSHARP_NAMING
    }

    fn options(&self) -> Vec<TargetOption> {
        vec![TargetOption {
            name: PROJECT_NAME,
            description: "C# project name",
            default: None,
        }]
    }
}

/// Register every C# target.
pub fn register_all(registry: &mut TargetRegistry) {
    registry.register(ClientTarget);
    registry.register(ActivityTarget);
}
