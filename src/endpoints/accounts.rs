use super::{Endpoint, Schema, Verb};
use crate::tools::ToolParam;

const ID: ToolParam = ToolParam::number("id", "The account id").required();

const ACCOUNT_FIELDS: &[ToolParam] = &[
    ID,
    ToolParam::array(
        "bidderLocation",
        "Input parameter: Your bidder locations that have distinct URLs.",
    ),
    ToolParam::string(
        "cookieMatchingNid",
        "Input parameter: The nid parameter value used in cookie match requests. Please contact your technical account manager if you need to change this.",
    ),
    ToolParam::string(
        "cookieMatchingUrl",
        "Input parameter: The base URL used in cookie match requests.",
    ),
    ToolParam::string("kind", "Input parameter: Resource type."),
    ToolParam::number(
        "maximumActiveCreatives",
        "Input parameter: The maximum number of active creatives that an account can have, where a creative is active if it was inserted or bid with in the last 30 days. Please contact your technical account manager if you need to change this.",
    ),
    ToolParam::number(
        "maximumTotalQps",
        "Input parameter: The sum of all bidderLocation.maximumQps values cannot exceed this. Please contact your technical account manager if you need to change this.",
    ),
    ToolParam::number(
        "numberActiveCreatives",
        "Input parameter: The number of creatives that this account inserted or bid with in the last 30 days.",
    ),
];

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        tool_name: "get_accounts",
        description: "Retrieves the authenticated user's list of accounts.",
        verb: Verb::Get,
        path: "/accounts",
        path_params: &[],
        query_params: &[],
        request: None,
        response: Schema::AccountsList,
        params: &[],
    },
    Endpoint {
        tool_name: "get_accounts_id",
        description: "Gets one account by ID.",
        verb: Verb::Get,
        path: "/accounts/{id}",
        path_params: &["id"],
        query_params: &[],
        request: None,
        response: Schema::Account,
        params: &[ID],
    },
    Endpoint {
        tool_name: "patch_accounts_id",
        description: "Updates an existing account. This method supports patch semantics.",
        verb: Verb::Patch,
        path: "/accounts/{id}",
        path_params: &["id"],
        query_params: &[],
        request: Some(Schema::Account),
        response: Schema::Account,
        params: ACCOUNT_FIELDS,
    },
    Endpoint {
        tool_name: "put_accounts_id",
        description: "Updates an existing account.",
        verb: Verb::Put,
        path: "/accounts/{id}",
        path_params: &["id"],
        query_params: &[],
        request: Some(Schema::Account),
        response: Schema::Account,
        params: ACCOUNT_FIELDS,
    },
];
