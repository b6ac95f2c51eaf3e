use mlconsole_core::models::Transformation;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformationArg {
    /// drop the listed columns from the dataset
    RemoveFeatures,
    /// encode the listed categorical columns as numbers
    ConvertToNumbers,
}

impl From<TransformationArg> for Transformation {
    fn from(arg: TransformationArg) -> Self {
        match arg {
            TransformationArg::RemoveFeatures => Transformation::RemoveFeatures,
            TransformationArg::ConvertToNumbers => Transformation::ConvertToNumbers,
        }
    }
}
