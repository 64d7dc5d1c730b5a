//! MCP server wiring: tool router, resource handlers, stdio transport.
//!
//! Tool handlers never surface transport-level errors to the protocol;
//! degradable operations answer with fallback data and only the ISS tools
//! return an error-flagged result, mirroring the aggregation service's
//! degradation rules.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, Annotated, CallToolResult, Content, Implementation, ListResourcesResult,
        PaginatedRequestParams, RawResource, ReadResourceRequestParams, ReadResourceResult,
        ResourceContents, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use tracing::info;

use galactic_grid_lib::{GridService, LaunchSearch, SpaceApiConfig};

use crate::error::Error;
use crate::render;
use crate::types::{
    GetIssPositionParams, GetMissionDetailsParams, GetSatelliteDataParams,
    GetUpcomingLaunchesParams, SearchMissionsParams,
};

/// URI of the live ISS data resource.
pub const ISS_RESOURCE_URI: &str = "space://iss/current";

/// The stdio MCP server fronting the aggregation service.
pub struct GalacticGridServer {
    service: GridService,
    tool_router: ToolRouter<Self>,
}

impl GalacticGridServer {
    pub fn from_config(config: &SpaceApiConfig) -> galactic_grid_lib::Result<Self> {
        Ok(Self {
            service: GridService::from_config(config)?,
            tool_router: Self::tool_router(),
        })
    }

    /// Serve over stdio until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        info!("starting MCP server on stdio");
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }

    fn tool_error(message: String) -> CallToolResult {
        let mut result = CallToolResult::success(vec![Content::text(message)]);
        result.is_error = Some(true);
        result
    }

    fn iss_resource() -> Annotated<RawResource> {
        let mut raw = RawResource::new(ISS_RESOURCE_URI, "iss-current");
        raw.title = Some("Current ISS Position".to_string());
        raw.description = Some(
            "Current International Space Station position and orbital data".to_string(),
        );
        raw.mime_type = Some("application/json".to_string());
        raw.no_annotation()
    }
}

#[tool_router]
impl GalacticGridServer {
    #[tool(
        name = "getMissionDetails",
        description = "Get detailed information about a specific space mission by ID"
    )]
    pub async fn get_mission_details(
        &self,
        Parameters(params): Parameters<GetMissionDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let mission = self.service.mission_details(&params.mission_id).await;
        Ok(CallToolResult::success(vec![Content::text(
            render::mission(&mission),
        )]))
    }

    #[tool(
        name = "searchMissions",
        description = "Search space missions across agencies by text, agency, status, or date range"
    )]
    pub async fn search_missions(
        &self,
        Parameters(params): Parameters<SearchMissionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let missions = self.service.search_missions(&params.into()).await;
        Ok(CallToolResult::success(vec![Content::text(
            render::missions(&missions),
        )]))
    }

    #[tool(
        name = "getUpcomingLaunches",
        description = "Get upcoming rocket launches within a specified time period"
    )]
    pub async fn get_upcoming_launches(
        &self,
        Parameters(params): Parameters<GetUpcomingLaunchesParams>,
    ) -> Result<CallToolResult, McpError> {
        let search: LaunchSearch = params.into();
        let days = search.days();
        let launches = self.service.upcoming_launches(&search).await;
        Ok(CallToolResult::success(vec![Content::text(
            render::upcoming_launches(&launches, days),
        )]))
    }

    #[tool(
        name = "getISSPosition",
        description = "Get the current real-time position of the International Space Station"
    )]
    pub async fn get_iss_position(
        &self,
        Parameters(params): Parameters<GetIssPositionParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.service.iss_position(params.include_passes).await {
            Ok(position) => Ok(CallToolResult::success(vec![Content::text(
                render::iss_position(&position),
            )])),
            Err(err) => Ok(Self::tool_error(format!(
                "❌ Error fetching ISS position: {}",
                err
            ))),
        }
    }

    #[tool(
        name = "getSatelliteData",
        description = "Get live tracking data for a specific satellite or a catalog of well-known satellites"
    )]
    pub async fn get_satellite_data(
        &self,
        Parameters(params): Parameters<GetSatelliteDataParams>,
    ) -> Result<CallToolResult, McpError> {
        let satellites = self.service.satellite_data(&params.into()).await;
        Ok(CallToolResult::success(vec![Content::text(
            render::satellites(&satellites),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for GalacticGridServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "galactic-grid".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Galactic Grid space data. Tools cover mission lookup and search, \
                 upcoming launches, live ISS position, and satellite tracking; the \
                 space://iss/current resource carries the raw ISS position as JSON."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![Self::iss_resource()],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        if request.uri != ISS_RESOURCE_URI {
            return Err(McpError::resource_not_found(
                format!("unknown resource {}", request.uri),
                None,
            ));
        }
        let position = self
            .service
            .iss_position(true)
            .await
            .map_err(|err| Error::from(err).into_mcp())?;
        let json = serde_json::to_string_pretty(&position)
            .map_err(|err| Error::internal(err.to_string()).into_mcp())?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: ISS_RESOURCE_URI.to_string(),
                mime_type: Some("application/json".to_string()),
                text: json,
                meta: None,
            }],
        })
    }
}
