//! The embedded reading list, in syllabus order.
//!
//! Filename suffix assignment depends on this ordering, so entries must not
//! be reordered once papers have been downloaded.

use crate::types::Citation;

/// All syllabus papers to resolve, with manual URLs where a known-good
/// direct link exists.
pub fn papers() -> Vec<Citation> {
    vec![
        Citation::with_url(
            "Ramey",
            2016,
            "Macroeconomic shocks and their propagation.",
            "https://econweb.ucsd.edu/~vramey/research/Shocks_HOM_Ramey.pdf",
        ),
        Citation::with_url(
            "Blanchard",
            2025,
            "Convergence? Thoughts about the evolution of mainstream macroeconomics over the last 40 years.",
            "https://www.nber.org/system/files/chapters/c15152/c15152.pdf",
        ),
        Citation::with_url(
            "Newey",
            1987,
            "A Simple, Positive Semi-definite, Heteroskedasticity and Autocorrelation Consistent Covariance Matrix.",
            "https://www.nber.org/papers/t0055.pdf",
        ),
        Citation::with_url(
            "Cogley",
            1995,
            "Effects of the Hodrick-Prescott Filter on Trend and Difference Stationary Time Series: Implications for Business Cycle Research.",
            "https://public.econ.duke.edu/~boller/Econ.883/cogley_nason_jedc_95.pdf",
        ),
        Citation::new(
            "Stock",
            1999,
            "Business Cycle Fluctuations in U.S. Macroeconomic Time Series.",
        ),
        Citation::with_url(
            "Andrews",
            2019,
            "Weak Instruments in Instrumental Variables Regression: Theory and Practice",
            "https://par.nsf.gov/servlets/purl/10142670",
        ),
        Citation::with_url(
            "Blanchard",
            1988,
            "The Dynamic Effects of Aggregate Demand and Supply Disturbances.",
            "https://www.nber.org/system/files/working_papers/w2737/w2737.pdf",
        ),
        Citation::new("Bernanke", 1998, "Measuring Monetary Policy."),
        Citation::with_url(
            "Christiano",
            1999,
            "Monetary policy shocks: What have we learned and to what end?",
            "https://www.nber.org/system/files/working_papers/w6400/w6400.pdf",
        ),
        Citation::with_url(
            "Bernanke",
            2005,
            "Measuring the effects of monetary policy: A factor-augmented vector autoregressive (FAVAR) approach",
            "https://www.nber.org/system/files/working_papers/w10220/w10220.pdf",
        ),
        Citation::new("Gilchrist", 2012, "Credit spreads and business cycle fluctuations."),
        Citation::new(
            "Jarocinski",
            2020,
            "Deconstructing Monetary Policy Surprises--The Role of Information Shocks.",
        ),
        Citation::with_url(
            "Romer",
            2004,
            "A New Measure of Monetary Shocks: Derivation and Implications",
            "https://eml.berkeley.edu/~dromer/papers/AER_September04.pdf",
        ),
        Citation::new(
            "Nakamura",
            2014,
            "Fiscal stimulus in a monetary union: Evidence from US regions.",
        ),
        Citation::new(
            "Gertler",
            2015,
            "Monetary policy surprises, credit costs, and economic activity.",
        ),
        Citation::new(
            "Ramey",
            2018,
            "Government spending multipliers in good times and in bad: evidence from US historical data.",
        ),
        Citation::new(
            "Romer",
            2018,
            "Why Some Times Are Different: Macroeconomic Policy and the Aftermath of Financial Crises.",
        ),
        Citation::new("Barnichon", 2020, "Identifying Modern Macro Equations with Old Shocks."),
        Citation::new(
            "Bauer",
            2023,
            "A Reassessment of Monetary Policy Surprises and High-Frequency Identification.",
        ),
        Citation::new("Townsend", 1983, "Forecasting the Forecasts of Others."),
        Citation::new(
            "Woodford",
            2002,
            "Imperfect Common Knowledge and the Effects of Monetary Policy.",
        ),
        Citation::new("Laubach", 2003, "Measuring the natural rate of interest."),
        Citation::new(
            "Kose",
            2003,
            "International Business Cycles: World, Region, and Country-Specific Factors.",
        ),
        Citation::new(
            "Gurkaynak",
            2005,
            "Do actions speak louder than words? The response of asset prices to monetary policy actions and statements.",
        ),
        Citation::new("McCracken", 2016, "FRED-MD: A monthly database for macroeconomic research."),
        Citation::new("Fernald", 2017, "The Disappointing Recovery of Output after 2009."),
        Citation::new(
            "Swanson",
            2021,
            "Measuring the effects of federal reserve forward guidance and asset purchases on financial markets.",
        ),
        Citation::new(
            "Blanchard",
            1980,
            "The solution of linear difference models under rational expectations.",
        ),
        Citation::new("Kydland", 1982, "Time to Build and Aggregate Fluctuations."),
        Citation::new(
            "Clarida",
            2000,
            "Monetary Policy Rules and Macroeconomic Stability: Evidence and Some Theory.",
        ),
        Citation::new(
            "Christiano",
            2005,
            "Nominal rigidities and the dynamic effects of a shock to monetary policy.",
        ),
        Citation::new(
            "Smets",
            2007,
            "Shocks and frictions in US business cycles: A Bayesian DSGE approach.",
        ),
        Citation::new("Fernandez-Villaverde", 2007, "ABCs (and Ds) of understanding VARs."),
        Citation::new("Gertler", 2011, "A model of unconventional monetary policy."),
        Citation::new(
            "Anzoategui",
            2019,
            "Endogenous technology adoption and R&D as sources of business cycle persistence.",
        ),
        Citation::new(
            "Carroll",
            2006,
            "The method of endogenous gridpoints for solving dynamic stochastic optimization problems.",
        ),
        Citation::new("Gourinchas", 2002, "Consumption over the Life Cycle."),
        Citation::new(
            "Arellano",
            2008,
            "Default risk and income fluctuations in emerging economies.",
        ),
        Citation::new(
            "Kaplan",
            2014,
            "A model of the consumption response to fiscal stimulus payments.",
        ),
        Citation::new(
            "Krusell",
            1998,
            "Income and wealth heterogeneity in the macroeconomy.",
        ),
        Citation::new("Thomas", 2002, "Is lumpy investment relevant for the business cycle?"),
        Citation::new(
            "Guerrieri",
            2017,
            "Credit crises, precautionary savings, and the liquidity trap.",
        ),
        Citation::new("Kaplan", 2018, "Monetary policy according to HANK."),
    ]
}
