// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Role keyword taxonomy
//!
//! An ordered table of role folders and the phrases that indicate them.
//! Order matters: when two roles tie on score, the one listed first wins.

use regex::Regex;

use crate::{Result, SorterError};

/// Built-in role table, in tie-break order.
pub const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    ("Python", &[
        "python", "django", "flask", "fastapi", "pandas", "numpy", "scikit-learn",
        "tensorflow", "pytorch", "keras", "celery", "sqlalchemy", "pytest",
    ]),
    ("JavaScript", &[
        "javascript", "js", "node.js", "nodejs", "react", "vue", "angular",
        "typescript", "express", "next.js", "nuxt", "jquery", "webpack", "babel",
    ]),
    ("React", &[
        "react", "react.js", "reactjs", "redux", "next.js", "gatsby", "jsx",
    ]),
    ("Node", &[
        "node.js", "nodejs", "express", "nestjs", "koa", "socket.io", "mongo",
    ]),
    ("Java", &[
        "java", "spring", "spring boot", "hibernate", "jpa", "maven", "gradle",
        "jsp", "servlet", "javaee", "j2ee", "struts",
    ]),
    (".NET", &[
        ".net", "dotnet", "c#", "csharp", "asp.net", "aspnet", "entity framework",
        "blazor", "xamarin", "wcf", "linq", "nuget",
    ]),
    ("DevOPS", &[
        "devops", "docker", "kubernetes", "k8s", "jenkins", "ci/cd", "ci cd",
        "terraform", "ansible", "chef", "puppet", "aws", "azure", "gcp",
        "github actions", "gitlab ci", "prometheus", "grafana", "elasticsearch",
        "kibana", "nginx", "apache", "linux", "bash", "shell scripting",
    ]),
    ("GoLang", &["go", "golang", "goroutine", "gin", "echo", "beego"]),
    ("PHP", &[
        "php", "laravel", "symfony", "codeigniter", "wordpress", "drupal", "magento",
    ]),
    ("WordPress", &[
        "wordpress", "wp", "woocommerce", "php", "theme development", "plugin development",
    ]),
    ("Magento", &["magento", "magento 2", "ecommerce", "php"]),
    ("Mobile", &[
        "ios", "swift", "objective-c", "android", "kotlin", "react native",
        "flutter", "xamarin", "mobile app", "app development", "ios engineer",
        "ios developer", "android developer", "mobile developer",
    ]),
    ("Kotlin", &["kotlin", "android", "coroutines", "ktor"]),
    ("Unity", &["unity", "unity3d", "c#", "game development", "unity engine"]),
    ("QA", &[
        "qa", "quality assurance", "testing", "selenium", "cypress", "jest",
        "junit", "test automation", "manual testing", "automated testing",
        "test cases", "bug tracking", "jira", "testrail",
    ]),
    ("Fullstack", &[
        "full stack", "fullstack", "full-stack", "mern", "mean", "mevn",
        "react", "node", "mongodb", "postgresql", "mysql",
    ]),
    ("Blockchain", &[
        "blockchain", "ethereum", "solidity", "web3", "smart contracts",
        "bitcoin", "cryptocurrency", "defi", "nft",
    ]),
    ("Data Engineer", &[
        "data engineer", "etl", "data pipeline", "apache spark", "hadoop",
        "airflow", "data warehouse", "sql", "big data", "kafka", "flink",
    ]),
    ("Data Security", &[
        "security", "cybersecurity", "penetration testing", "vulnerability assessment",
        "owasp", "ssl/tls", "encryption", "security audit", "compliance",
    ]),
    ("WebOps", &[
        "webops", "web operations", "deployment", "hosting", "cdn", "load balancing",
    ]),
    ("Salesforce", &[
        "salesforce", "apex", "soql", "lightning", "salesforce admin",
        "salesforce developer", "sfdc",
    ]),
    ("SAP", &["sap", "abap", "sap erp", "sap fico", "sap mm", "sap sd"]),
    ("Dynamics", &[
        "dynamics", "dynamics 365", "dynamics crm", "power platform", "powerapps",
    ]),
    ("Contentful", &["contentful", "cms", "headless cms", "content management"]),
    ("Clojure", &["clojure", "clojurescript"]),
    ("Delphi", &["delphi", "pascal", "firemonkey"]),
    ("Ruby on Rails", &["ruby", "rails", "ruby on rails", "ror", "sinatra"]),
    ("Project Manager", &[
        "project manager", "pmp", "agile", "scrum master", "project management",
        "stakeholder", "project planning", "risk management",
    ]),
    ("Scrum Master", &[
        "scrum master", "agile coach", "sprint", "scrum", "kanban", "sprint planning",
    ]),
    ("Product Manager", &[
        "product manager", "product management", "product owner", "roadmap",
        "user stories", "product strategy",
    ]),
    ("Technical Leader", &[
        "technical lead", "tech lead", "team lead", "engineering manager",
        "architecture", "system design", "leadership",
    ]),
    ("Analista Funcional", &[
        "analista funcional", "business analyst", "functional analyst",
        "requirements analysis", "bpmn",
    ]),
    ("UX UI", &[
        "ux", "ui", "user experience", "user interface", "design", "figma",
        "adobe xd", "sketch", "prototyping", "wireframing",
    ]),
    ("Director de Arte", &[
        "art director", "director de arte", "creative director", "graphic design",
        "art direction",
    ]),
    ("Marketing", &[
        "marketing", "digital marketing", "seo", "sem", "google ads", "facebook ads",
        "content marketing", "social media", "analytics",
    ]),
    ("Sales Engineer", &[
        "sales engineer", "pre-sales", "technical sales", "solution architect",
    ]),
    ("Customer Experience", &[
        "customer experience", "cx", "customer success", "customer support",
    ]),
    ("Technical Writer", &[
        "technical writer", "technical writing", "documentation", "api documentation",
    ]),
    ("Recruiters", &[
        "recruiter", "talent acquisition", "hr", "human resources", "recruiting",
    ]),
    ("Logística", &["logistics", "logística", "supply chain", "inventory management"]),
    ("Pasantes", &["intern", "internship", "pasante", "trainee"]),
    ("Trainees", &["trainee", "training", "junior", "entry level"]),
    ("Juniors", &["junior", "entry level", "graduate", "recent graduate"]),
    ("Piscólogas", &["psychology", "psicología", "psychologist", "mental health"]),
    ("Fuera de la Industria", &["outside tech", "non-tech", "other industry"]),
];

/// A keyword phrase with its compiled word-boundary pattern
#[derive(Debug, Clone)]
pub struct Keyword {
    phrase: String,
    pattern: Regex,
}

impl Keyword {
    /// Compile a phrase into a `\b<phrase>\b` matcher
    pub fn new(phrase: &str) -> Result<Self> {
        let phrase = phrase.to_lowercase();
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&phrase)))?;
        Ok(Self { phrase, pattern })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Count non-overlapping matches in already lower-cased text
    pub fn count_in(&self, text_lower: &str) -> usize {
        self.pattern.find_iter(text_lower).count()
    }
}

/// One role folder and its indicator keywords
#[derive(Debug, Clone)]
pub struct RoleEntry {
    name: String,
    keywords: Vec<Keyword>,
}

impl RoleEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }
}

/// Ordered, immutable role → keywords table
#[derive(Debug, Clone)]
pub struct Taxonomy {
    roles: Vec<RoleEntry>,
}

impl Taxonomy {
    /// Build the taxonomy shipped with the sorter
    pub fn builtin() -> Result<Self> {
        Self::from_table(BUILTIN_ROLES.iter().map(|(role, keywords)| (*role, keywords.iter().copied())))
    }

    /// Build a taxonomy from `(role, keywords)` pairs, keeping their order.
    ///
    /// Every role needs a non-empty name and at least one keyword.
    pub fn from_table<'a, R, K>(table: R) -> Result<Self>
    where
        R: IntoIterator<Item = (&'a str, K)>,
        K: IntoIterator<Item = &'a str>,
    {
        let mut roles: Vec<RoleEntry> = Vec::new();

        for (name, phrases) in table {
            if name.trim().is_empty() {
                return Err(SorterError::Taxonomy("role name must not be empty".to_string()));
            }
            if roles.iter().any(|r| r.name == name) {
                return Err(SorterError::Taxonomy(format!("duplicate role '{}'", name)));
            }

            let keywords = phrases
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .map(Keyword::new)
                .collect::<Result<Vec<_>>>()?;

            if keywords.is_empty() {
                return Err(SorterError::Taxonomy(format!("role '{}' has no keywords", name)));
            }

            roles.push(RoleEntry {
                name: name.to_string(),
                keywords,
            });
        }

        Ok(Self { roles })
    }

    /// Roles in tie-break order
    pub fn roles(&self) -> &[RoleEntry] {
        &self.roles
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.name == role)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
