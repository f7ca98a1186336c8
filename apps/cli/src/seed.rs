use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

pub const DEFAULT_OUT: &str = "departments.csv";

const CSV_HEADER: &str = "id,name,description,created_at,updated_at";

const DEFAULT_DEPARTMENTS: [(&str, &str); 5] = [
    ("Administración", "Departamento de Administración y Finanzas"),
    ("Operaciones", "Departamento de Operaciones y Logística"),
    ("Recursos Humanos", "Departamento de Recursos Humanos"),
    ("Viceministerio Armas", "Viceministerio De Armas"),
    ("Direccion Tecnologia", "Direccion de Tecnologia y Comunicaciones"),
];

#[derive(Debug, Clone)]
pub struct SeedDepartment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

pub fn default_departments(now: DateTime<Utc>) -> Vec<SeedDepartment> {
    let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    DEFAULT_DEPARTMENTS
        .iter()
        .map(|(name, description)| SeedDepartment {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_at: stamp.clone(),
            updated_at: stamp.clone(),
        })
        .collect()
}

pub fn render_csv(departments: &[SeedDepartment]) -> String {
    let mut lines = Vec::with_capacity(departments.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for dept in departments {
        let fields = [
            &dept.id,
            &dept.name,
            &dept.description,
            &dept.created_at,
            &dept.updated_at,
        ];
        let row: Vec<String> = fields.iter().map(|field| quote(field)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Writes the default departments to `path` and returns how many rows were written.
pub fn write_departments_csv(path: &Path) -> io::Result<usize> {
    let departments = default_departments(Utc::now());
    fs::write(path, render_csv(&departments))?;
    Ok(departments.len())
}
