use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(
    UnknownRecordsFormat,
    "Could not infer records format from path '{path}' (expected .json or .csv).",
    { path: &str }
);

// Parsing-related.
define_client_error!(InvalidJson, "Invalid JSON format.");
define_client_error!(InvalidJsonContent, "Invalid JSON content: {details}.", { details: &str });
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoTimestamp, "Invalid ISO timestamp: {value}.", { value: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// View configuration.
define_client_error!(
    DuplicateDimensionName,
    "View '{view}' declares the filter dimension '{dimension}' more than once.",
    { view: &str, dimension: &str }
);
define_client_error!(
    UnknownFilterDimension,
    "View '{view}' has no filter dimension named '{dimension}'.",
    { view: &str, dimension: &str }
);
define_client_error!(
    IncompatibleFilterValue,
    "Filter dimension '{dimension}' ({kind}) cannot take the value {value}.",
    { dimension: &str, kind: &str, value: &str }
);

// Drafts and validator chains.
define_client_error!(
    DraftIndexOutOfRange,
    "Line item index {index} is out of range (draft has {len} items).",
    { index: usize, len: usize }
);
define_client_error!(
    ValidatorChainFull,
    "A category cannot have more than {max} validators.",
    { max: usize }
);
define_client_error!(
    ValidatorAlreadyInChain,
    "User '{user_id}' is already a validator for this category.",
    { user_id: &str }
);
define_client_error!(
    ValidatorNotInChain,
    "User '{user_id}' is not a validator for this category.",
    { user_id: &str }
);
