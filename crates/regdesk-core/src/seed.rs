//! Sample regulations the board starts with.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::regulation::{Category, Regulation, RegulationStatus};

#[derive(Debug, Clone, Copy)]
enum Age {
    Now,
    LastWeek,
    LastMonth,
}

impl Age {
    fn before(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Age::Now => now,
            Age::LastWeek => now - Duration::days(7),
            Age::LastMonth => now - Duration::days(30),
        }
    }
}

struct Fixture {
    title: &'static str,
    content: &'static str,
    category: Category,
    status: RegulationStatus,
    pinned: bool,
    relevant: bool,
    tags: &'static [&'static str],
    created: Age,
    updated: Age,
}

/// Build the sample regulation set relative to `now`.
///
/// Each category's members get consecutive `sort_order` values starting at
/// zero, in the order listed here. Ids are fresh on every call.
pub fn sample_regulations(now: DateTime<Utc>) -> Vec<Regulation> {
    let mut next_order = [0i64; 3];
    FIXTURES
        .iter()
        .map(|f| {
            let slot = &mut next_order[f.category.index()];
            let sort_order = *slot;
            *slot += 1;
            Regulation {
                id: Uuid::new_v4(),
                title: f.title.to_string(),
                content: f.content.to_string(),
                category: f.category,
                status: f.status,
                is_pinned: f.pinned,
                is_relevant: f.relevant,
                tags: f.tags.iter().map(|t| t.to_string()).collect(),
                sort_order,
                created_at: f.created.before(now),
                updated_at: f.updated.before(now),
                move_notes: None,
            }
        })
        .collect()
}

const FIXTURES: &[Fixture] = &[
        Fixture {
            title: "GDPR Compliance Requirements",
            content: "General Data Protection Regulation (GDPR) is a regulation in EU law on data protection and privacy. It addresses the transfer of personal data outside the EU and EEA areas. The GDPR aims primarily to give control to individuals over their personal data and to simplify the regulatory environment for international business by unifying the regulation within the EU. Organizations must implement appropriate technical and organizational measures to ensure data protection by design and by default.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: true,
            relevant: true,
            tags: &["privacy", "data-protection", "EU"],
            created: Age::LastMonth,
            updated: Age::Now,
        },
        Fixture {
            title: "SOC 2 Type II Certification",
            content: "SOC 2 Type II is an audit report that evaluates the design and operating effectiveness of controls at a service organization relevant to security, availability, processing integrity, confidentiality, and privacy. This certification is critical for demonstrating trustworthiness to customers and partners.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["security", "audit", "compliance"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "California Consumer Privacy Act (CCPA)",
            content: "The CCPA grants California residents expanded rights to know about the personal information that businesses collect about them and how it is used and shared. Businesses must provide notice of these rights and honor consumer requests to delete personal information, opt out of data sales, and access their personal information.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["privacy", "california", "consumer-rights"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "Data Breach Notification Protocol",
            content: "Organizations must notify affected individuals and relevant authorities within 72 hours of discovering a data breach. This includes detailed documentation of the breach scope, affected data types, and remediation measures taken.",
            category: Category::Personal,
            status: RegulationStatus::InPlanning,
            pinned: false,
            relevant: true,
            tags: &["security", "incident-response", "compliance"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "PCI DSS 4.0 Compliance Standards",
            content: "Payment Card Industry Data Security Standard (PCI DSS) version 4.0 provides requirements for organizations that handle branded credit cards. This includes maintaining secure networks, protecting cardholder data, maintaining vulnerability management programs, and implementing strong access control measures.",
            category: Category::Personal,
            status: RegulationStatus::PartiallyApplicable,
            pinned: false,
            relevant: true,
            tags: &["payment", "security", "compliance"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "Employee Background Check Requirements",
            content: "Standard procedures for conducting background checks on new employees including identity verification, criminal history, employment history, and educational credential verification. All checks must be completed before onboarding.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["HR", "compliance", "hiring"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "Remote Work Security Policy",
            content: "Security requirements for remote workers including VPN usage, secure Wi-Fi connections, device encryption, screen locking policies, and physical security of work equipment. All remote devices must comply with endpoint security standards.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["remote-work", "security", "policy"],
            created: Age::LastMonth,
            updated: Age::Now,
        },
        Fixture {
            title: "API Security Best Practices",
            content: "Guidelines for securing APIs including authentication, authorization, rate limiting, input validation, encryption in transit, and API key management. All public APIs must undergo security review before deployment.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["API", "security", "development"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Third-Party Vendor Assessment",
            content: "Framework for evaluating and monitoring third-party vendors handling sensitive data. Includes security questionnaires, annual audits, contract requirements, and ongoing risk assessment procedures.",
            category: Category::Personal,
            status: RegulationStatus::PartiallyApplicable,
            pinned: false,
            relevant: true,
            tags: &["vendor", "risk", "assessment"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "Password Policy and MFA Requirements",
            content: "Comprehensive password requirements including minimum length, complexity, rotation schedules, and multi-factor authentication mandates. All users must enable MFA for accessing sensitive systems.",
            category: Category::Personal,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["authentication", "security", "policy"],
            created: Age::LastMonth,
            updated: Age::Now,
        },
        Fixture {
            title: "ISO 27001 Information Security",
            content: "ISO 27001 is an international standard that provides requirements for establishing, implementing, maintaining and continually improving an information security management system (ISMS). The standard includes requirements for risk assessment and treatment designed to address information security risks.",
            category: Category::Relevant,
            status: RegulationStatus::InEffect,
            pinned: true,
            relevant: true,
            tags: &["security", "iso", "international"],
            created: Age::LastMonth,
            updated: Age::Now,
        },
        Fixture {
            title: "HIPAA Privacy Rule",
            content: "The HIPAA Privacy Rule establishes national standards to protect individuals medical records and other personal health information and applies to health plans, health care clearinghouses, and health care providers. Covered entities must implement safeguards to ensure the confidentiality, integrity, and availability of all electronic protected health information.",
            category: Category::Relevant,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["healthcare", "privacy", "PHI"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "NIST Cybersecurity Framework 2.0",
            content: "The NIST Cybersecurity Framework provides guidance for organizations to manage and reduce cybersecurity risk. It consists of five core functions: Identify, Protect, Detect, Respond, and Recover. The framework is voluntary and provides a common language for understanding, managing, and expressing cybersecurity risk.",
            category: Category::Relevant,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["cybersecurity", "framework", "NIST"],
            created: Age::LastMonth,
            updated: Age::Now,
        },
        Fixture {
            title: "AI Governance Framework",
            content: "Proposed framework for responsible artificial intelligence deployment covering ethical guidelines, bias mitigation, transparency requirements, and accountability measures. This framework aims to ensure AI systems are developed and deployed in a manner that respects human rights and democratic values.",
            category: Category::Relevant,
            status: RegulationStatus::InPlanning,
            pinned: false,
            relevant: true,
            tags: &["AI", "ethics", "governance"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Cloud Security Alliance Standards",
            content: "The CSA provides best practices for secure cloud computing environments including identity and access management, data encryption, secure APIs, and compliance monitoring. These standards help organizations maintain security while leveraging cloud infrastructure.",
            category: Category::Relevant,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["cloud", "security", "infrastructure"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "Zero Trust Architecture Implementation",
            content: "Modern security approach that eliminates implicit trust and continuously validates every stage of digital interaction. Implementation includes identity verification, least privilege access, microsegmentation, and continuous monitoring across all network resources.",
            category: Category::Relevant,
            status: RegulationStatus::PartiallyApplicable,
            pinned: false,
            relevant: true,
            tags: &["security", "architecture", "zero-trust"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Environmental Data Reporting Standards",
            content: "Regulations requiring disclosure of environmental impact data including carbon emissions, waste management, and sustainability initiatives. Organizations must report annually with third-party verification of metrics.",
            category: Category::Relevant,
            status: RegulationStatus::InPlanning,
            pinned: false,
            relevant: true,
            tags: &["environmental", "reporting", "ESG"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Cryptocurrency Compliance Framework",
            content: "Proposed regulations for cryptocurrency transactions and digital asset management. Includes anti-money laundering requirements, customer due diligence, and transaction monitoring protocols.",
            category: Category::Relevant,
            status: RegulationStatus::InPlanning,
            pinned: false,
            relevant: true,
            tags: &["crypto", "finance", "AML"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Open Banking Standards",
            content: "Technical and security standards for open banking APIs allowing third-party providers to access financial data. Includes strong customer authentication, consent management, and data minimization principles.",
            category: Category::Relevant,
            status: RegulationStatus::PartiallyApplicable,
            pinned: false,
            relevant: true,
            tags: &["banking", "API", "finance"],
            created: Age::LastMonth,
            updated: Age::LastWeek,
        },
        Fixture {
            title: "Biometric Data Protection Regulation",
            content: "Special protections for biometric data including facial recognition, fingerprints, and voice patterns. Requires explicit consent, secure storage with encryption, and strict access controls.",
            category: Category::Relevant,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["biometric", "privacy", "data-protection"],
            created: Age::LastMonth,
            updated: Age::Now,
        },
        Fixture {
            title: "Supply Chain Cybersecurity Standards",
            content: "Requirements for securing supply chain including vendor risk management, software bill of materials, and third-party code review. Addresses software supply chain attacks and dependency vulnerabilities.",
            category: Category::Relevant,
            status: RegulationStatus::InEffect,
            pinned: false,
            relevant: true,
            tags: &["supply-chain", "security", "risk"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Quantum Computing Readiness",
            content: "Preparing for post-quantum cryptography including migration strategies for quantum-resistant algorithms. Organizations should begin assessing cryptographic inventory and planning transitions.",
            category: Category::Relevant,
            status: RegulationStatus::InPlanning,
            pinned: false,
            relevant: true,
            tags: &["quantum", "cryptography", "future"],
            created: Age::LastWeek,
            updated: Age::Now,
        },
        Fixture {
            title: "Archived Company Policy 2019",
            content: "This is an archived company policy from 2019 that is no longer in effect but kept for historical reference purposes. It covered previous data retention requirements that have since been superseded by newer regulations.",
            category: Category::Irrelevant,
            status: RegulationStatus::OutOfEffect,
            pinned: false,
            relevant: false,
            tags: &["archived", "historical"],
            created: Age::LastMonth,
            updated: Age::LastMonth,
        },
        Fixture {
            title: "Legacy Network Security Protocol",
            content: "Outdated network security guidelines from 2018 that have been replaced by modern zero-trust architecture principles. Maintained for reference purposes only.",
            category: Category::Irrelevant,
            status: RegulationStatus::OutOfEffect,
            pinned: false,
            relevant: false,
            tags: &["archived", "network", "legacy"],
            created: Age::LastMonth,
            updated: Age::LastMonth,
        },
        Fixture {
            title: "Deprecated Authentication Standards",
            content: "Previous authentication requirements using basic password policies. These have been superseded by multi-factor authentication and passwordless authentication methods.",
            category: Category::Irrelevant,
            status: RegulationStatus::OutOfEffect,
            pinned: false,
            relevant: false,
            tags: &["archived", "authentication", "deprecated"],
            created: Age::LastMonth,
            updated: Age::LastMonth,
        },
        Fixture {
            title: "Old Data Center Guidelines",
            content: "Physical data center security and maintenance guidelines from on-premise infrastructure. No longer applicable due to full migration to cloud services.",
            category: Category::Irrelevant,
            status: RegulationStatus::OutOfEffect,
            pinned: false,
            relevant: false,
            tags: &["archived", "datacenter", "physical-security"],
            created: Age::LastMonth,
            updated: Age::LastMonth,
        },
        Fixture {
            title: "Flash Player Security Policy",
            content: "Security guidelines for Adobe Flash Player implementations. No longer relevant as Flash has reached end-of-life and is no longer supported.",
            category: Category::Irrelevant,
            status: RegulationStatus::OutOfEffect,
            pinned: false,
            relevant: false,
            tags: &["archived", "flash", "deprecated"],
            created: Age::LastMonth,
            updated: Age::LastMonth,
        },
];
