//! Compiled-in option declarations: names, defaults, and help text.
//!
//! This is the single registration step for every tunable option. It is a
//! pure function of no external input, so two registries filled here are
//! always identical. Lookups anywhere else in the system only succeed for
//! names declared below.

use super::registry::ParamStore;
use super::strategy;

/// Declares every option with its default value and help text.
#[allow(clippy::too_many_lines)] // bulk enumeration, data not logic
pub(crate) fn fill(store: &mut ParamStore) {
    // Integer options
    store.declare_integer("runNumber", 0, "Number designating this run of an experiment");
    store.declare_integer("threads", 4, "Number of threads if evaluating in parallel");
    store.declare_integer("maxGens", 500, "Maximum generations allowed for a generational experiment");
    store.declare_integer("mu", 20, "Size of parent population in mu +/, lambda scheme");
    store.declare_integer("lambda", 50, "Size of child population in mu +/, lambda scheme");
    store.declare_integer("trials", 1, "Number of trials each individual is evaluated");
    store.declare_integer("teams", 1, "Number of teams each individual is evaluated in for coevolution");
    store.declare_integer("steps", 10000, "Maximum time steps in one task episode");
    store.declare_integer("randomSeed", -1, "Random seed used to control algorithmic randomness (not domain randomness)");
    store.declare_integer("initialPopulationSeed", -1, "Random seed used to determine the initial population");
    store.declare_integer("lastSavedGeneration", 0, "Last generation where genotypes were saved");
    store.declare_integer("steadyStateIndividualsPerGeneration", 400, "How many individuals count as a log generation for steady-state EAs");
    store.declare_integer("maxModes", 1000, "Mode mutation cannot add more than this many modes");
    store.declare_integer("startingModes", 1, "Modes that a network starts with");
    store.declare_integer("multitaskModes", 1, "Number of multitask modes (1 if not multitask at all)");
    store.declare_integer("litterSize", 10, "Number of offspring from a single source to evaluate for culling methods");
    store.declare_integer("cleanFrequency", -1, "How frequently the archetype needs to be cleaned out");
    store.declare_integer("trialIncreaseFrequency", 1, "If increasing trials, do so every time this many generations pass");
    store.declare_integer("fsLinksPerOut", 1, "Initial links per output with feature selective nets");
    store.declare_integer("hiddenMLPNeurons", 10, "Number of hidden neurons for MLPs");
    // Long options
    store.declare_long("lastInnovation", 0, "Highest innovation number used so far");
    store.declare_long("lastGenotypeId", 0, "Highest genotype id used so far");
    // Boolean options
    store.declare_boolean("io", true, "Write output logs");
    store.declare_boolean("netio", true, "Write files of saved networks");
    store.declare_boolean("watch", false, "Show evaluations during evolution");
    store.declare_boolean("watchFitness", false, "Show min/max fitness scores");
    store.declare_boolean("parallelEvaluations", false, "Perform evaluations in parallel");
    store.declare_boolean("parallelSave", false, "Perform file saving in parallel");
    store.declare_boolean("logPerformance", false, "Whether or not to log performance information in a performance log");
    store.declare_boolean("logChildScores", false, "For mu/lambda approaches with separate parent/child populations, log child info");
    store.declare_boolean("logMutationAndLineage", false, "Whether or not to log information about the mutations and lineage");
    store.declare_boolean("logLock", false, "Don't mess with log files at all");
    store.declare_boolean("evalReport", false, "Write file of details for each eval");
    store.declare_boolean("saveAllChampions", false, "Saves all champions of each generation");
    store.declare_boolean("watchLastBest", false, "Shows best result from last generation");
    store.declare_boolean("inheritFitness", false, "Child fitness is partially inherited from parents");
    store.declare_boolean("averageScoreHistory", false, "Surviving parent fitness averaged across generations");
    store.declare_boolean("randomArgMaxTieBreak", true, "Whenever multiple options have same value in argmax, pick random choice");
    store.declare_boolean("scaleTrials", false, "Whether or not to scale the number of trials as the number of generations increases");
    store.declare_boolean("meltAfterCrossover", false, "Melt frozen genes after crossover");
    // Double options
    store.declare_double("crossoverRate", 0.5, "Rate of crossover if mating is used");
    store.declare_double("netPerturbRate", 0.8, "Mutation rate for network weight perturbation");
    store.declare_double("perLinkMutateRate", 0.05, "Per link chance of weight perturbation");
    store.declare_double("netLinkRate", 0.4, "Mutation rate for creation of new network synapses");
    store.declare_double("netSpliceRate", 0.2, "Mutation rate for splicing of new network nodes");
    store.declare_double("netChangeActivationRate", 0.3, "Mutation rate for changing a neuron's activation function");
    store.declare_double("realMutateRate", 0.3, "Mutation rate for modifying indexes in real-valued string");
    store.declare_double("intReplaceRate", 0.3, "Rate for integer replacement mutation");
    store.declare_double("weightBound", 50.0, "The bound for network weights used by SBX and polynomial mutation");
    store.declare_double("softmaxTemperature", 0.25, "Temperature parameter for softmax selection");
    store.declare_double("mlpMutationRate", 0.1, "Rate of mutation for MLPs");
    store.declare_double("backpropLearningRate", 0.1, "Rate of backprop learning for neural networks");
    store.declare_double("inheritProportion", 0.4, "Portion of a parent's fitness that contributes to child fitness");
    store.declare_double("rlEpsilon", 0.1, "Frequency of completely random actions during reinforcement learning");
    store.declare_double("rlGamma", 0.99, "Discount factor used for reinforcement learning");
    // Text options
    store.declare_text("base", "", "Base directory for all simulations within one experiment");
    store.declare_text("saveTo", "", "Prefix for subdirectory where output from one run will be saved");
    store.declare_text("log", "log", "Name of prefix for log files of experiment data");
    store.declare_text("loadFrom", "", "Where a replay experiment loads networks from");
    store.declare_text("lastSavedDirectory", "", "Name of last directory where networks were saved");
    store.declare_text("seedGenotype", "", "Path to file with seed genotype for population");
    store.declare_text("branchRoot", "", "Evolve from some other run as starting point, based off of this parameter file");
    store.declare_text("archetype", "", "Network that receives all mutations so as to keep other networks properly aligned");
    // Strategy options
    store.declare_strategy("experiment", Some(&strategy::GENERATIONAL_EXPERIMENT), "The experiment driver to execute");
    store.declare_strategy("ea", Some(&strategy::SELECTIVE_BREEDING_EA), "The evolutionary algorithm to run");
    store.declare_strategy("task", None, "The task to solve");
    store.declare_strategy("genotype", Some(&strategy::TWEANN_GENOTYPE), "The genotype to evolve with");
    store.declare_strategy("crossover", Some(&strategy::TWEANN_CROSSOVER), "Crossover operator to use if mating is used");
    store.declare_strategy("weightPerturber", Some(&strategy::GAUSSIAN_PERTURBER), "Random generator used to perturb mutated weights");
    store.declare_strategy("nicheDefinition", None, "Method for getting the niche of an individual for local competition");
    store.declare_strategy("ensembleArbitrator", None, "How to arbitrate between agents when using an ensemble");
    store.declare_strategy("performanceStat", Some(&strategy::AVERAGE_STAT), "The stat used to summarize the performance of the population");
    store.declare_strategy("goalTargetStat", Some(&strategy::MAX_STAT), "The stat used to determine what value objective goals work towards");
}
