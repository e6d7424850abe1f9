// src/scanner/vocabulary.rs
//! Term lists the scanner matches against lowercased posting text.
//! Matching is plain substring containment, so list order decides output order.

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "javascript", "typescript", "python", "java", "c#", "c++", "c", "php", "ruby", "go", "rust",
    "swift", "kotlin", "scala", "r", "matlab", "perl", "haskell", "elixir", "clojure", "f#",
];

pub const FRONTEND_TECH: &[&str] = &[
    "react", "angular", "vue", "svelte", "ember", "backbone", "jquery", "html", "css", "sass",
    "less", "bootstrap", "tailwind", "material-ui", "ant design", "chakra ui",
    "styled-components", "emotion", "webpack", "vite", "parcel", "babel", "eslint", "prettier",
    "jest", "cypress", "playwright",
];

pub const BACKEND_TECH: &[&str] = &[
    "node.js", "express", "koa", "hapi", "fastify", "nest", "django", "flask", "fastapi",
    "tornado", "spring", "hibernate", "struts", "play", "quarkus", "micronaut", "laravel",
    "symfony", "codeigniter", "asp.net", ".net core", "entity framework", "dapper", "xamarin",
    "blazor",
];

pub const DATABASES: &[&str] = &[
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra", "dynamodb", "sqlite",
    "oracle", "sql server", "mariadb", "neo4j", "influxdb", "couchdb", "firebase", "supabase",
];

pub const CLOUD_DEVOPS: &[&str] = &[
    "aws", "azure", "gcp", "heroku", "digitalocean", "linode", "vultr", "docker", "kubernetes",
    "terraform", "ansible", "chef", "puppet", "jenkins", "gitlab", "github", "bitbucket",
    "circleci", "travis", "github actions", "azure devops", "jira", "confluence", "trello",
    "asana", "slack", "teams",
];

pub const DATA_SCIENCE: &[&str] = &[
    "machine learning", "ml", "ai", "artificial intelligence", "deep learning", "neural networks",
    "data science", "big data", "hadoop", "spark", "kafka", "airflow", "pandas", "numpy",
    "scikit-learn", "tensorflow", "pytorch", "keras", "opencv", "nltk", "spacy", "tableau",
    "power bi", "looker",
];

pub const MOBILE_TECH: &[&str] = &[
    "react native", "flutter", "xamarin", "ios", "android", "swift", "kotlin", "objective-c",
    "java android", "cordova", "phonegap", "ionic", "xcode", "android studio",
];

/// Every skill group in search order
pub const SKILL_GROUPS: &[&[&str]] = &[
    PROGRAMMING_LANGUAGES,
    FRONTEND_TECH,
    BACKEND_TECH,
    DATABASES,
    CLOUD_DEVOPS,
    DATA_SCIENCE,
    MOBILE_TECH,
];

/// Abbreviation found in text -> skill name added when not already present
pub const SKILL_VARIATIONS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("dotnet", ".net"),
    ("asp", "asp.net"),
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("ds", "data science"),
    ("db", "database"),
    ("sql", "sql database"),
    ("nosql", "nosql database"),
];

pub const REMOTE_TERMS: &[&str] = &["remote", "work from home", "wfh", "telecommute"];
pub const ONSITE_TERMS: &[&str] = &["onsite", "office", "location", "on-site"];
pub const HYBRID_TERMS: &[&str] = &["hybrid", "flexible", "part remote"];
pub const CONTRACT_TERMS: &[&str] = &["contract", "temporary", "freelance", "consulting"];
pub const PART_TIME_TERMS: &[&str] = &["part-time", "part time", "parttime"];

pub const METHODOLOGY_KEYWORDS: &[&str] = &[
    "agile", "scrum", "kanban", "waterfall", "devops", "ci/cd", "tdd", "bdd", "ddd", "lean",
    "six sigma", "sprint", "standup", "retrospective", "grooming", "planning",
];

pub const ARCHITECTURE_KEYWORDS: &[&str] = &[
    "rest", "graphql", "soap", "api", "microservices", "monolith", "serverless", "event-driven",
    "domain-driven", "layered architecture", "mvc", "mvvm", "clean architecture",
];

pub const TESTING_KEYWORDS: &[&str] = &[
    "unit testing", "integration testing", "e2e testing", "test automation", "qa",
    "quality assurance", "code review", "pair programming", "mob programming", "code coverage",
    "sonarqube",
];

pub const SECURITY_KEYWORDS: &[&str] = &[
    "oauth", "jwt", "ssl", "tls", "encryption", "authentication", "authorization",
    "penetration testing", "vulnerability assessment", "performance testing", "load testing",
];

pub const KEYWORD_GROUPS: &[&[&str]] = &[
    METHODOLOGY_KEYWORDS,
    ARCHITECTURE_KEYWORDS,
    TESTING_KEYWORDS,
    SECURITY_KEYWORDS,
];
