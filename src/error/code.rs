/// Error codes with category prefix
///
/// Categories:
/// - NET: Network connectivity errors
/// - API: Product API errors
/// - IO: File system operations
/// - CFG: Configuration parsing/validation
/// - CAT: Catalog data errors
/// - VAL: Input validation errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors (NET001-NET099)
    /// Connection failed
    Net001,
    /// Request timeout
    Net002,

    // API errors (API001-API099)
    /// Rate limit exceeded
    Api001,
    /// Session rejected
    Api002,
    /// Resource not found
    Api003,
    /// Server error (5xx)
    Api004,
    /// Request rejected (other 4xx)
    Api005,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // Catalog errors (CAT001-CAT099)
    /// Product not found
    Cat001,
    /// Malformed product data
    Cat002,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// All defined codes, in declaration order
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::Net001,
        ErrorCode::Net002,
        ErrorCode::Api001,
        ErrorCode::Api002,
        ErrorCode::Api003,
        ErrorCode::Api004,
        ErrorCode::Api005,
        ErrorCode::Io001,
        ErrorCode::Io002,
        ErrorCode::Cfg001,
        ErrorCode::Cat001,
        ErrorCode::Cat002,
        ErrorCode::Val001,
        ErrorCode::Int001,
    ];

    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Network
            ErrorCode::Net001 => "NET001",
            ErrorCode::Net002 => "NET002",
            // API
            ErrorCode::Api001 => "API001",
            ErrorCode::Api002 => "API002",
            ErrorCode::Api003 => "API003",
            ErrorCode::Api004 => "API004",
            ErrorCode::Api005 => "API005",
            // I/O
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            // Config
            ErrorCode::Cfg001 => "CFG001",
            // Catalog
            ErrorCode::Cat001 => "CAT001",
            ErrorCode::Cat002 => "CAT002",
            // Validation
            ErrorCode::Val001 => "VAL001",
            // Internal
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "Unable to establish network connection to the product service",
            ErrorCode::Net002 => "The request timed out while waiting for the product service",
            ErrorCode::Api001 => "The product service rate limit has been exceeded",
            ErrorCode::Api002 => "The session was rejected by the product service",
            ErrorCode::Api003 => "The requested endpoint was not found",
            ErrorCode::Api004 => "The product service encountered an internal error",
            ErrorCode::Api005 => "The product service rejected the query",
            ErrorCode::Io001 => "The specified file was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Cat001 => "No product with the given id exists in the catalog",
            ErrorCode::Cat002 => "The product data could not be parsed",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "1. Check your network connection\n2. Verify api_base_url in the config\n3. Try again later if the service is down",
            ErrorCode::Net002 => "1. Increase timeout_secs in the config\n2. Try again later",
            ErrorCode::Api001 => "1. Wait a few minutes before retrying",
            ErrorCode::Api002 => "1. Log in again to refresh the session\n2. Check STOREFRONT_TOKEN",
            ErrorCode::Api003 => "1. Verify api_base_url points at the storefront gateway",
            ErrorCode::Api004 => "1. Wait a few minutes and retry\n2. Report the issue if it persists",
            ErrorCode::Api005 => "1. Check the filter values (category ids, price range)",
            ErrorCode::Io001 => "1. Verify the file path is correct",
            ErrorCode::Io002 => "1. Check file permissions",
            ErrorCode::Cfg001 => "1. Check ~/.storefront/config.toml syntax\n2. Remove the file to fall back to defaults",
            ErrorCode::Cat001 => "1. Use 'storefront search' to list available products",
            ErrorCode::Cat002 => "1. Check the dataset file is a JSON array of products",
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'storefront --help' for usage information",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with debug logs (-vv)",
        }
    }
}
