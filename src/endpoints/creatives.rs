use super::{Endpoint, Schema, Verb};
use crate::tools::ToolParam;

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        tool_name: "get_creatives",
        description: "Retrieves a list of the authenticated user's active creatives. A creative will be available 30-40 minutes after submission.",
        verb: Verb::Get,
        path: "/creatives",
        path_params: &[],
        query_params: &["maxResults", "pageToken", "statusFilter"],
        request: None,
        response: Schema::CreativesList,
        params: &[
            ToolParam::number(
                "maxResults",
                "Maximum number of entries returned on one result page. If not set, the default is 100. Optional.",
            ),
            ToolParam::string(
                "pageToken",
                "A continuation token, used to page through ad clients. To retrieve the next page, set this parameter to the value of \"nextPageToken\" from the previous response. Optional.",
            ),
            ToolParam::string(
                "statusFilter",
                "When specified, only creatives having the given status are returned.",
            ),
        ],
    },
    Endpoint {
        tool_name: "post_creatives",
        description: "Submit a new creative.",
        verb: Verb::Post,
        path: "/creatives",
        path_params: &[],
        query_params: &[],
        request: Some(Schema::Creative),
        response: Schema::Creative,
        params: &[
            ToolParam::number("accountId", "Input parameter: Account id."),
            ToolParam::string(
                "buyerCreativeId",
                "Input parameter: A buyer-specific id identifying the creative in this ad.",
            ),
            ToolParam::string("agencyId", "Input parameter: The agency id for this creative."),
            ToolParam::string(
                "HTMLSnippet",
                "Input parameter: The HTML snippet that displays the ad when inserted in the web page. If set, videoURL should not be set.",
            ),
            ToolParam::string(
                "videoURL",
                "Input parameter: The url to fetch a video ad. If set, HTMLSnippet should not be set.",
            ),
            ToolParam::number("width", "Input parameter: Ad width."),
            ToolParam::number("height", "Input parameter: Ad height."),
            ToolParam::string(
                "advertiserName",
                "Input parameter: The name of the company being advertised in the creative.",
            ),
            ToolParam::array("advertiserId", "Input parameter: Detected advertiser id, if any. Read-only. This field should not be set in requests."),
            ToolParam::array(
                "attribute",
                "Input parameter: All attributes for the ads that may be shown from this snippet.",
            ),
            ToolParam::array(
                "clickThroughUrl",
                "Input parameter: The set of destination urls for the snippet.",
            ),
            ToolParam::array(
                "impressionTrackingUrl",
                "Input parameter: The set of urls to be called to record an impression.",
            ),
            ToolParam::array("productCategories", "Input parameter: Detected product categories, if any. Read-only. This field should not be set in requests."),
            ToolParam::array(
                "restrictedCategories",
                "Input parameter: All restricted categories for the ads that may be shown from this snippet.",
            ),
            ToolParam::array("sensitiveCategories", "Input parameter: Detected sensitive categories, if any. Read-only. This field should not be set in requests."),
            ToolParam::array(
                "vendorType",
                "Input parameter: All vendor types for the ads that may be shown from this snippet.",
            ),
            ToolParam::string(
                "apiUploadTimestamp",
                "Input parameter: The last upload timestamp of this creative if it was uploaded via API. Read-only. The value of this field is generated, and will be ignored for uploads. (formatted RFC 3339 timestamp).",
            ),
            ToolParam::array("corrections", "Input parameter: Shows any corrections that were applied to this creative. Read-only. This field should not be set in requests."),
            ToolParam::array(
                "disapprovalReasons",
                "Input parameter: The reasons for disapproval, if any. Note that not all disapproval reasons may be categorized, so it is possible for the creative to have a status of DISAPPROVED with an empty list for disapproval_reasons. Read-only. This field should not be set in requests.",
            ),
            ToolParam::object("filteringReasons", "Input parameter: The filtering reasons for the creative. Read-only. This field should not be set in requests."),
            ToolParam::string("status", "Input parameter: Creative serving status. Read-only. This field should not be set in requests."),
            ToolParam::number("version", "Input parameter: The version for this creative. Read-only. This field should not be set in requests."),
            ToolParam::string("kind", "Input parameter: Resource type."),
        ],
    },
    Endpoint {
        tool_name: "get_creatives_accountId_buyerCreativeId",
        description: "Gets the status for a single creative. A creative will be available 30-40 minutes after submission.",
        verb: Verb::Get,
        path: "/creatives/{accountId}/{buyerCreativeId}",
        path_params: &["accountId", "buyerCreativeId"],
        query_params: &[],
        request: None,
        response: Schema::Creative,
        params: &[
            ToolParam::number(
                "accountId",
                "The id for the account that will serve this creative.",
            )
            .required(),
            ToolParam::string("buyerCreativeId", "The buyer-specific id for this creative.").required(),
        ],
    },
];
