use std::fmt;
use std::str::FromStr;

/// SBOM schema requested from the inventory conversion tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SbomSchema {
    #[default]
    CycloneDx,
    Spdx,
}

impl SbomSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            SbomSchema::CycloneDx => "cyclonedx",
            SbomSchema::Spdx => "spdx",
        }
    }
}

impl FromStr for SbomSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cyclonedx" => Ok(SbomSchema::CycloneDx),
            "spdx" => Ok(SbomSchema::Spdx),
            _ => Err(format!(
                "Invalid SBOM schema: {}. Please specify 'cyclonedx' or 'spdx'",
                s
            )),
        }
    }
}

impl fmt::Display for SbomSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document serialization requested from the inventory conversion tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Tag,
    Yaml,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Tag => "tag",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "tag" => Ok(DocumentFormat::Tag),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'tag' or 'yaml'",
                s
            )),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format requested from the filesystem scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOutputFormat {
    #[default]
    CycloneDxJson,
    CycloneDxXml,
    SpdxJson,
    SpdxTagValue,
    SyftJson,
    Table,
}

impl ScanOutputFormat {
    const ALL: [ScanOutputFormat; 6] = [
        ScanOutputFormat::CycloneDxJson,
        ScanOutputFormat::CycloneDxXml,
        ScanOutputFormat::SpdxJson,
        ScanOutputFormat::SpdxTagValue,
        ScanOutputFormat::SyftJson,
        ScanOutputFormat::Table,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanOutputFormat::CycloneDxJson => "cyclonedx-json",
            ScanOutputFormat::CycloneDxXml => "cyclonedx-xml",
            ScanOutputFormat::SpdxJson => "spdx-json",
            ScanOutputFormat::SpdxTagValue => "spdx-tag-value",
            ScanOutputFormat::SyftJson => "syft-json",
            ScanOutputFormat::Table => "table",
        }
    }
}

impl FromStr for ScanOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or_else(|| {
                let supported: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!(
                    "Invalid format: {}. Supported formats: {}",
                    s,
                    supported.join(", ")
                )
            })
    }
}

impl fmt::Display for ScanOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
