use crate::config::ChartConfig;
use crate::domain::{
    chart::{ChartInteraction, ChartLayoutService, ChartScene, ChartSurface, TooltipPresenter},
    errors::AppResult,
    logging::{LogComponent, get_logger},
    race_data::{RaceDataRepository, RaceRecord, normalize},
};
use std::rc::Rc;

/// Result of a completed render pass.
pub struct RenderedChart {
    pub scene: ChartScene,
    pub interaction: Rc<ChartInteraction>,
}

/// Use case: load the dataset, lay out the scene and hand it to a surface.
pub struct ChartRenderer<R: RaceDataRepository> {
    repository: R,
    config: ChartConfig,
    tooltip: Rc<dyn TooltipPresenter>,
}

impl<R: RaceDataRepository> ChartRenderer<R> {
    pub fn new(repository: R, config: ChartConfig, tooltip: Rc<dyn TooltipPresenter>) -> Self {
        Self { repository, config, tooltip }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub async fn load_dataset(&self, url: &str) -> AppResult<Vec<RaceRecord>> {
        self.repository.fetch_records(url).await
    }

    /// Normalize and lay out. Fails before anything is drawn.
    pub fn build_scene(&self, records: &[RaceRecord]) -> AppResult<ChartScene> {
        let points = normalize(records)?;
        ChartLayoutService::new(&self.config).layout(&points)
    }

    /// Draw already-loaded records.
    pub fn draw_records<S: ChartSurface>(
        &self,
        records: &[RaceRecord],
        surface: &mut S,
    ) -> AppResult<RenderedChart> {
        let scene = self.build_scene(records)?;
        let interaction = Rc::new(ChartInteraction::new(scene.points(), Rc::clone(&self.tooltip)));
        surface.draw(&scene, Rc::clone(&interaction))?;

        get_logger().info(
            LogComponent::Application("ChartRenderer"),
            &format!("✅ Rendered {} riders", scene.dots.len()),
        );
        Ok(RenderedChart { scene, interaction })
    }

    /// Fetch from the configured URL, or `url` when given, then draw.
    pub async fn render<S: ChartSurface>(
        &self,
        url: Option<&str>,
        surface: &mut S,
    ) -> AppResult<RenderedChart> {
        let url = url.unwrap_or(&self.config.dataset_url);
        let records = self.load_dataset(url).await?;
        self.draw_records(&records, surface)
    }

    /// Top of the render pass: failures are logged and swallowed.
    pub async fn run<S: ChartSurface>(&self, surface: &mut S) -> Option<RenderedChart> {
        match self.render(None, surface).await {
            Ok(rendered) => Some(rendered),
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("ChartRenderer"),
                    &format!("❌ Chart not rendered: {e}"),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{PointerPosition, TooltipModel};
    use crate::domain::errors::{AppError, FetchError};
    use crate::infrastructure::{SvgMarkupSurface, StaticRaceData};
    use futures::executor::block_on;

    const TWO_RIDERS: &str = r#"[
        {"Time": "36:40", "Name": "A", "Year": 1994, "Nationality": "ITA", "Doping": ""},
        {"Time": "35:12", "Name": "B", "Year": 2001, "Nationality": "USA", "Doping": "Admitted"}
    ]"#;

    struct FailingSource;

    impl RaceDataRepository for FailingSource {
        async fn fetch_records(&self, _url: &str) -> AppResult<Vec<RaceRecord>> {
            Err(FetchError::Status(404).into())
        }
    }

    fn renderer<R: RaceDataRepository>(repo: R) -> (ChartRenderer<R>, Rc<TooltipModel>) {
        let tooltip = Rc::new(TooltipModel::new(100.0, -110.0));
        (ChartRenderer::new(repo, ChartConfig::default(), tooltip.clone()), tooltip)
    }

    #[test]
    fn two_riders_end_to_end() {
        let (renderer, tooltip) = renderer(StaticRaceData::new(TWO_RIDERS));
        let mut surface = SvgMarkupSurface::new();
        let rendered = block_on(renderer.render(None, &mut surface)).unwrap();

        let colours: Vec<_> = rendered.scene.dots.iter().map(|d| d.fill).collect();
        assert_ne!(colours[0], colours[1]);
        assert_eq!(rendered.scene.legend.len(), 2);
        assert_eq!(surface.interactive_dots(), 2);

        rendered.interaction.hover(1, PointerPosition::new(300.0, 300.0));
        let shown = tooltip.snapshot();
        let html = shown.content.as_ref().unwrap().to_html();
        assert!(html.contains("Year: 2001, Time: 35:12"), "{html}");
        assert!(html.ends_with("<br/><br/>Admitted"));
        assert_eq!(shown.data_year(), Some(2001));

        rendered.interaction.leave();
        assert_eq!(tooltip.snapshot().opacity(), 0.0);
    }

    #[test]
    fn fetch_failure_draws_nothing() {
        let (renderer, _) = renderer(FailingSource);
        let mut surface = SvgMarkupSurface::new();
        assert!(block_on(renderer.run(&mut surface)).is_none());
        assert!(surface.finish().is_err());
    }

    #[test]
    fn malformed_time_aborts_before_drawing() {
        let body = r#"[
            {"Time": "36:40", "Name": "A", "Year": 1994, "Nationality": "ITA", "Doping": ""},
            {"Time": "36.40", "Name": "B", "Year": 1995, "Nationality": "ITA", "Doping": ""}
        ]"#;
        let (renderer, _) = renderer(StaticRaceData::new(body));
        let mut surface = SvgMarkupSurface::new();
        let err = block_on(renderer.render(None, &mut surface)).err().unwrap();
        assert_eq!(err, AppError::MalformedTime { index: 1, raw: "36.40".to_string() });
        assert!(surface.finish().is_err());
    }

    #[test]
    fn empty_dataset_is_reported() {
        let (renderer, _) = renderer(StaticRaceData::new("[]"));
        let mut surface = SvgMarkupSurface::new();
        let err = block_on(renderer.render(None, &mut surface)).err().unwrap();
        assert_eq!(err, AppError::EmptyDataset);
    }
}
